//! Shared constants and argument checks

pub mod constants;
pub mod validate;

pub use constants::*;
