// libulc/src/protocol/responses/read.rs

use crate::constants::READ_CHUNK_LEN;
use crate::protocol::parser;
use crate::Result;

/// Decode a READ answer. At least 16 bytes are required; anything past the
/// first 16 is ignored.
pub fn decode_read(data: &[u8]) -> Result<[u8; READ_CHUNK_LEN]> {
    let slice = parser::slice_at(data, 0, READ_CHUNK_LEN)?;
    let mut chunk = [0u8; READ_CHUNK_LEN];
    chunk.copy_from_slice(slice);
    Ok(chunk)
}
