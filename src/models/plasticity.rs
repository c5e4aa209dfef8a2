//! Spike-timing-dependent plasticity (STDP)
//!
//! Two-branch exponential weight update on the timing difference
//! `x = t1 - t0`:
//!
//! ```text
//! dw =  A exp(-x / tau)   if x > 0   (potentiation)
//! dw = -B exp( x / tau)   if x <= 0  (depression)
//! ```
//!
//! Simultaneous events (`x == 0`) fall on the depression side and yield
//! exactly `-B`.

use crate::solvers::Result;
use crate::utils::constants::{STDP_AMPLITUDE_DEP, STDP_AMPLITUDE_POT, STDP_TAU};
use crate::utils::validate::{finite, nonzero};

/// Which side of the STDP window a timing pair falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdpBranch {
    Potentiation,
    Depression,
}

/// STDP amplitudes and time constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StdpParams {
    /// Potentiation amplitude
    pub a: f64,
    /// Depression amplitude
    pub b: f64,
    /// Decay time constant
    pub tau: f64,
}

impl Default for StdpParams {
    fn default() -> Self {
        Self {
            a: STDP_AMPLITUDE_POT,
            b: STDP_AMPLITUDE_DEP,
            tau: STDP_TAU,
        }
    }
}

impl StdpParams {
    pub fn new(a: f64, b: f64, tau: f64) -> Self {
        Self { a, b, tau }
    }

    pub fn branch(&self, t1: f64, t0: f64) -> StdpBranch {
        if t1 - t0 > 0.0 {
            StdpBranch::Potentiation
        } else {
            StdpBranch::Depression
        }
    }

    /// Weight change for events at `t1` and `t0`
    pub fn weight_change(&self, t1: f64, t0: f64) -> Result<f64> {
        let tau = nonzero("tau", self.tau)?;
        let x = t1 - t0;

        let dw = match self.branch(t1, t0) {
            StdpBranch::Potentiation => self.a * (-x / tau).exp(),
            StdpBranch::Depression => -self.b * (x / tau).exp(),
        };
        finite("dw", dw)
    }
}

/// Weight change `dw` for amplitudes `a`, `b`, time constant `tau` and event
/// times `t1`, `t0`
pub fn change_weights(a: f64, b: f64, tau: f64, t1: f64, t0: f64) -> Result<f64> {
    StdpParams::new(a, b, tau).weight_change(t1, t0)
}
