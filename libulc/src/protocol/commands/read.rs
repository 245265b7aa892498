// libulc/src/protocol/commands/read.rs

use crate::constants::CMD_READ;
use crate::types::PageAddress;

/// Encode READ: `[0x30, page]`. The card answers with 16 bytes (4 pages).
pub fn encode_read(page: PageAddress) -> [u8; 2] {
    [CMD_READ, page.as_u8()]
}
