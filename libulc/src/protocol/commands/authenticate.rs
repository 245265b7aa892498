// libulc/src/protocol/commands/authenticate.rs

use crate::constants::{
    AUTHENTICATE_KEY_NO, CMD_AUTHENTICATE, CMD_AUTHENTICATE_CONTINUE, EK_RND2_RNDR1_LEN,
};
use crate::types::EkRnd2RndR1;

/// Encode phase 1: `[0x1A, 0x00]`.
pub fn encode_authenticate() -> [u8; 2] {
    [CMD_AUTHENTICATE, AUTHENTICATE_KEY_NO]
}

/// Encode phase 2: `[0xAF]` followed by the 16-byte artifact (17 bytes).
pub fn encode_authenticate_continue(artifact: &EkRnd2RndR1) -> [u8; 1 + EK_RND2_RNDR1_LEN] {
    let mut buf = [0u8; 1 + EK_RND2_RNDR1_LEN];
    buf[0] = CMD_AUTHENTICATE_CONTINUE;
    buf[1..].copy_from_slice(artifact.as_bytes());
    buf
}
