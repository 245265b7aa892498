// libulc/src/codec/mod.rs
//! Documents exchanged with the external authority.

pub mod messages;
pub mod payload;

pub use messages::{AuthResponse, ReadResult, WritePreamble, REQUEST_TYPE_READ, REQUEST_TYPE_WRITE};
pub use payload::{decode_payload, encode_payload};
