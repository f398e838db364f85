//! Ambient helpers shared by the binary and the library crates.

pub mod utils;
pub mod env;
