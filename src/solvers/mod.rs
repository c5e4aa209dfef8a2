//! Numerical integration solvers
//!
//! The oscillator models in this crate are all advanced with the explicit
//! forward Euler scheme, so only that solver is provided.

mod base;
mod euler;

pub use base::*;
pub use euler::Euler;
