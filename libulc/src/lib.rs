// libulc/src/lib.rs

//! libulc
//!
//! Session protocol engine for Mifare Ultralight C cards: tag admission,
//! page I/O, the three-pass authentication handshake with an external
//! authority, and the documents exchanged with that authority.

pub mod auth;
pub mod card;
pub mod classifier;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
