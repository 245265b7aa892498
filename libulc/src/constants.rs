// libulc/src/constants.rs
//! Card command set and memory layout constants for Mifare Ultralight C.

/// READ command: `[0x30, page]`, returns 4 pages (16 bytes).
pub const CMD_READ: u8 = 0x30;

/// WRITE command: `[0xA2, page, b0, b1, b2, b3]`, writes a single page.
pub const CMD_WRITE: u8 = 0xA2;

/// AUTHENTICATE phase 1: `[0x1A, 0x00]`.
pub const CMD_AUTHENTICATE: u8 = 0x1A;

/// Key number argument sent with the phase-1 command.
pub const AUTHENTICATE_KEY_NO: u8 = 0x00;

/// AUTHENTICATE phase 2: `[0xAF] + ek(RndA || RndB')`.
pub const CMD_AUTHENTICATE_CONTINUE: u8 = 0xAF;

/// Leading byte of the card's phase-1 response (more frames follow).
pub const STATUS_ADDITIONAL_FRAME: u8 = 0xAF;

/// Leading byte of the card's phase-2 response.
pub const STATUS_OK: u8 = 0x00;

/// Size of a memory page in bytes.
pub const PAGE_SIZE: usize = 4;

/// Pages returned by a single READ command.
pub const PAGES_PER_READ: u8 = 4;

/// Bytes returned by a single READ command.
pub const READ_CHUNK_LEN: usize = PAGE_SIZE * PAGES_PER_READ as usize;

/// First page of the data window.
pub const FIRST_DATA_PAGE: u8 = 0x08;

/// One past the last page of the data window.
pub const DATA_PAGE_END: u8 = 0x1C;

/// Pages in the data window (20).
pub const DATA_PAGE_COUNT: usize = (DATA_PAGE_END - FIRST_DATA_PAGE) as usize;

/// Length of the memory image in bytes (80).
pub const MEMORY_IMAGE_LEN: usize = DATA_PAGE_COUNT * PAGE_SIZE;

/// Minimum link-layer frame size: one READ response must fit.
pub const MIN_FRAME_SIZE: usize = READ_CHUNK_LEN;

/// Length of the card challenge (Rnd1).
pub const CHALLENGE_LEN: usize = 8;

/// Length of the `EkRnd2_RndR1` artifact sent to the card in phase 2.
pub const EK_RND2_RNDR1_LEN: usize = 16;

/// Length of the `EkRndR2` value returned by the card in phase 2.
pub const EK_RNDR2_LEN: usize = 8;

/// Minimum response length of both authentication phases: status + 8 bytes.
pub const AUTH_RESPONSE_MIN_LEN: usize = 1 + CHALLENGE_LEN;

/// Default link timeout applied after connecting.
pub const DEFAULT_TRANSCEIVE_TIMEOUT_MS: u64 = 2000;
