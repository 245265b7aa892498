// libulc/src/protocol/commands/write.rs

use crate::constants::{CMD_WRITE, PAGE_SIZE};
use crate::types::PageAddress;

/// Encode WRITE: `[0xA2, page, b0, b1, b2, b3]`. The card accepts one page per command.
pub fn encode_write(page: PageAddress, data: &[u8; PAGE_SIZE]) -> [u8; 2 + PAGE_SIZE] {
    let mut buf = [0u8; 2 + PAGE_SIZE];
    buf[0] = CMD_WRITE;
    buf[1] = page.as_u8();
    buf[2..].copy_from_slice(data);
    buf
}
