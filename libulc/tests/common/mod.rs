#![allow(dead_code)]

pub mod fixtures;

pub use libulc::test_support::*;
