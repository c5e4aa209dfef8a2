//! Coupled voltage/current synapse step
//!
//! The output voltage follows an explicit Euler step of a driven, damped
//! second-order oscillator. The synaptic current is advanced with the
//! incoming derivative `id_0`, while the new `i_dot` is evaluated
//! algebraically from the start-of-step state. The current therefore lags
//! its own derivative by one step.

use tracing::debug;

use crate::solvers::{Result, SolverError};
use crate::utils::constants::{SYN_GAMMA, SYN_LAMBDA, SYN_LAMBDA_SYN, SYN_OMEGA, SYN_Q, SYN_R12};
use crate::utils::validate::{finite, nonzero};

/// Physical coefficients of the synapse circuit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynapseParams {
    pub gamma: f64,
    /// Resonant frequency
    pub omega: f64,
    /// Quality factor
    pub q: f64,
    pub lmda: f64,
    pub lmda_syn: f64,
    pub r12: f64,
}

impl Default for SynapseParams {
    fn default() -> Self {
        Self {
            gamma: SYN_GAMMA,
            omega: SYN_OMEGA,
            q: SYN_Q,
            lmda: SYN_LAMBDA,
            lmda_syn: SYN_LAMBDA_SYN,
            r12: SYN_R12,
        }
    }
}

/// Voltage, current and their derivatives
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SynapseState {
    pub v: f64,
    pub v_dot: f64,
    pub i: f64,
    pub i_dot: f64,
}

/// Outputs of the neighbouring neurons driving the synapse
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SynapseDrive {
    pub v1p: f64,
    pub v2p: f64,
    pub v2c: f64,
}

impl SynapseParams {
    /// Check every coefficient that ends up in a denominator
    pub fn validate(&self) -> Result<()> {
        nonzero("lmda", self.lmda)?;
        nonzero("lmda_syn", self.lmda_syn)?;
        nonzero("gamma", self.gamma)?;
        nonzero("omega", self.omega)?;
        if self.lmda_syn == 1.0 {
            debug!("rejecting lmda_syn == 1");
            return Err(SolverError::InvalidArgument {
                name: "lmda_syn",
                reason: "must differ from 1",
            });
        }
        Ok(())
    }

    /// Advance `state` by `dt` under `drive`
    pub fn step(&self, state: SynapseState, drive: SynapseDrive, dt: f64) -> Result<SynapseState> {
        self.validate()?;

        let SynapseState {
            v: v_0,
            v_dot: vd_0,
            i: i_0,
            i_dot: id_0,
        } = state;
        let Self {
            gamma,
            omega,
            q,
            lmda,
            lmda_syn,
            r12,
        } = *self;

        let v = v_0 + vd_0 * dt;
        let v_dot = vd_0
            + omega * omega
                * (drive.v1p
                    - q * omega * lmda_syn / lmda * i_0
                    - lmda_syn / lmda * id_0
                    - v_0
                    - q / omega * vd_0)
                * dt;

        let i = i_0 + id_0 * dt;
        let i_dot = (v_0 - lmda_syn * (drive.v2c + drive.v2p) - r12 / gamma * i_0) * lmda
            / (lmda_syn * (1.0 - lmda_syn));

        Ok(SynapseState {
            v: finite("v", v)?,
            v_dot: finite("v_dot", v_dot)?,
            i: finite("i", i)?,
            i_dot: finite("i_dot", i_dot)?,
        })
    }
}

/// Single synapse step, returns `(v, v_dot, i, i_dot)`
#[allow(clippy::too_many_arguments)]
pub fn synapse_step(
    v_0: f64,
    vd_0: f64,
    i_0: f64,
    id_0: f64,
    v1p: f64,
    v2p: f64,
    v2c: f64,
    gamma: f64,
    omega: f64,
    q: f64,
    lmda: f64,
    lmda_syn: f64,
    r12: f64,
    dt: f64,
) -> Result<(f64, f64, f64, f64)> {
    let params = SynapseParams {
        gamma,
        omega,
        q,
        lmda,
        lmda_syn,
        r12,
    };
    let state = SynapseState {
        v: v_0,
        v_dot: vd_0,
        i: i_0,
        i_dot: id_0,
    };
    let next = params.step(state, SynapseDrive { v1p, v2p, v2c }, dt)?;
    Ok((next.v, next.v_dot, next.i, next.i_dot))
}
