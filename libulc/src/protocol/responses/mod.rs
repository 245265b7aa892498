// libulc/src/protocol/responses/mod.rs

pub mod authenticate;
pub mod read;

pub use authenticate::{decode_challenge, decode_verification};
pub use read::decode_read;
