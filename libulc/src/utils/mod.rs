//! Small helpers shared across the crate: hex rendering and timeouts.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
