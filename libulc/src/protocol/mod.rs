// libulc/src/protocol/mod.rs
//! Ultralight C command encoding and response parsing.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::{
    Command, encode_authenticate, encode_authenticate_continue, encode_read, encode_write,
};
pub use responses::{decode_challenge, decode_read, decode_verification};
