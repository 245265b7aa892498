// libulc/src/card/mod.rs
//! Page-level I/O against the card's data window.
//!
//! Reads fetch 4 pages per command and writes store 1 page per command; the
//! card's WRITE only accepts a single page so the two directions stay
//! asymmetric.

pub mod operations;

pub use operations::{read_image, write_image};
