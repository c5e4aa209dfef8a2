//! Argument and result checks shared by the model formulas

use tracing::debug;

use crate::solvers::{Result, SolverError};

/// Reject a zero denominator before it reaches a division
#[inline]
pub fn nonzero(name: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        debug!(name, "rejecting zero denominator");
        return Err(SolverError::InvalidArgument {
            name,
            reason: "must be non-zero",
        });
    }
    Ok(value)
}

/// Reject NaN or infinite arguments
#[inline]
pub fn finite_arg(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        debug!(name, value, "rejecting non-finite argument");
        return Err(SolverError::InvalidArgument {
            name,
            reason: "must be finite",
        });
    }
    Ok(value)
}

/// Surface NaN or overflow in a computed quantity
#[inline]
pub fn finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NonFinite { quantity, value })
    }
}
