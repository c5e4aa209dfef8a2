//! Pulse and control currents inside a coupled junction pair

use crate::solvers::Result;
use crate::utils::validate::{finite, nonzero};

/// Coupling coefficients between a pulse and a control junction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouplingParams {
    /// Phase coupling coefficient
    pub lmda: f64,
    /// Drive scale
    pub lmda_s: f64,
    /// Fraction of the bias routed away from the pulse junction
    pub lmda_p: f64,
    /// Bias current
    pub i_b: f64,
    /// Control current normalisation
    pub eta: f64,
}

impl CouplingParams {
    /// Returns `(i_p, i_c)` for phases `phi_p`, `phi_c` and drive `i`
    pub fn currents(&self, phi_p: f64, phi_c: f64, i: f64) -> Result<(f64, f64)> {
        let eta = nonzero("eta", self.eta)?;

        let shared = -self.lmda * (phi_c + phi_p) + self.lmda_s * i;
        let i_p = shared + (1.0 - self.lmda_p) * self.i_b;
        let i_c = (shared - self.lmda_p * self.i_b) / eta;

        Ok((finite("i_p", i_p)?, finite("i_c", i_c)?))
    }
}

/// Pulse current `i_p` and control current `i_c`
///
/// ```text
/// i_p = -lmda (phi_c + phi_p) + lmda_s i + (1 - lmda_p) i_b
/// i_c = (-lmda (phi_c + phi_p) + lmda_s i - lmda_p i_b) / eta
/// ```
#[allow(clippy::too_many_arguments)]
pub fn currents(
    lmda: f64,
    phi_p: f64,
    phi_c: f64,
    lmda_s: f64,
    i: f64,
    lmda_p: f64,
    i_b: f64,
    eta: f64,
) -> Result<(f64, f64)> {
    CouplingParams {
        lmda,
        lmda_s,
        lmda_p,
        i_b,
        eta,
    }
    .currents(phi_p, phi_c, i)
}
