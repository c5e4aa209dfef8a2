//! Base solver traits and types

use nalgebra::DVector;
use thiserror::Error;

/// Errors raised by the integrators and model formulas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[error("Non-finite value for {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("Non-finite value for {quantity} at step {step}: {value}")]
    NonFiniteAt {
        quantity: &'static str,
        step: usize,
        value: f64,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SolverError>;

/// Core solver trait for numerical integration
pub trait Solver {
    /// Get current state vector
    fn state(&self) -> &DVector<f64>;
}

/// Explicit solver trait
pub trait ExplicitSolver: Solver {
    /// Advance the state by `dt` with the given right-hand side function
    ///
    /// The right-hand side receives the state at the start of the step and
    /// the elapsed time inside the step.
    fn step<F>(&mut self, f: F, dt: f64) -> Result<()>
    where
        F: FnMut(&DVector<f64>, f64) -> DVector<f64>;
}
