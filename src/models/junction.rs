//! Josephson-junction phase dynamics
//!
//! The junction is modelled as a driven, damped pendulum (RSJ model):
//!
//! ```text
//! phi'     = phi_dot
//! phi_dot' = i - sin(phi) - damp * phi_dot
//! ```
//!
//! Both the fixed-grid trajectory and the externally driven single step use
//! the same forward Euler update, so stepping [`junction_step`] `num` times
//! reproduces [`junction`] point for point.

use nalgebra::DVector;
use tracing::debug;

use crate::solvers::{Euler, ExplicitSolver, Result, Solver, SolverError};
use crate::utils::constants::{JJ_DAMPING, JJ_DRIVE};
use crate::utils::validate::{finite, finite_arg};

/// Phase and phase velocity of a single junction
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JunctionState {
    pub phi: f64,
    pub phi_dot: f64,
}

impl JunctionState {
    pub fn new(phi: f64, phi_dot: f64) -> Self {
        Self { phi, phi_dot }
    }
}

/// Damping and drive of a junction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JunctionParams {
    /// Damping coefficient
    pub damp: f64,
    /// Drive current
    pub i: f64,
}

impl Default for JunctionParams {
    fn default() -> Self {
        Self {
            damp: JJ_DAMPING,
            i: JJ_DRIVE,
        }
    }
}

/// Right-hand side of the junction ODE, returns `(phi', phi_dot')`
#[inline]
pub fn dynamics(phi: f64, phi_dot: f64, damp: f64, i: f64) -> (f64, f64) {
    (phi_dot, i - phi.sin() - damp * phi_dot)
}

impl JunctionParams {
    pub fn new(damp: f64, i: f64) -> Self {
        Self { damp, i }
    }

    /// Derivative of a `[phi, phi_dot]` state vector
    pub fn rhs(&self, x: &DVector<f64>) -> DVector<f64> {
        let (dphi, dphi_dot) = dynamics(x[0], x[1], self.damp, self.i);
        DVector::from_vec(vec![dphi, dphi_dot])
    }

    /// Advance `state` by one forward Euler step of size `dt`
    pub fn step(&self, state: JunctionState, dt: f64) -> Result<JunctionState> {
        let (dphi, dphi_dot) = dynamics(state.phi, state.phi_dot, self.damp, self.i);
        Ok(JunctionState {
            phi: finite("phi", state.phi + dphi * dt)?,
            phi_dot: finite("phi_dot", state.phi_dot + dphi_dot * dt)?,
        })
    }

    /// Integrate from rest over `num` uniform steps between `t_0` and `t_f`
    pub fn trajectory(&self, t_0: f64, t_f: f64, num: usize) -> Result<Trajectory> {
        let time = time_grid(t_0, t_f, num)?;
        let t_s = (t_f - t_0) / num as f64;
        debug!(num, t_s, damp = self.damp, i = self.i, "integrating junction trajectory");

        let mut phi = DVector::zeros(num + 1);
        let mut phi_dot = DVector::zeros(num + 1);

        let mut solver = Euler::new(DVector::zeros(2));
        for j in 1..=num {
            solver.step(|x, _t| self.rhs(x), t_s)?;

            let x = solver.state();
            for (quantity, value) in [("phi", x[0]), ("phi_dot", x[1])] {
                if !value.is_finite() {
                    debug!(quantity, step = j, value, "junction trajectory diverged");
                    return Err(SolverError::NonFiniteAt {
                        quantity,
                        step: j,
                        value,
                    });
                }
            }
            phi[j] = x[0];
            phi_dot[j] = x[1];
        }

        Ok(Trajectory {
            time,
            phi,
            phi_dot,
            step_size: t_s,
        })
    }
}

/// Uniform time grid of `num + 1` points from `t_0` to `t_f`
///
/// Point `k` is `t_0 + k * t_s`, so the grid never gains or loses a point
/// to accumulated rounding.
pub fn time_grid(t_0: f64, t_f: f64, num: usize) -> Result<DVector<f64>> {
    if num == 0 {
        debug!("rejecting empty time grid");
        return Err(SolverError::InvalidArgument {
            name: "num",
            reason: "must be at least 1",
        });
    }
    let t_0 = finite_arg("t_0", t_0)?;
    let t_f = finite_arg("t_f", t_f)?;

    let t_s = (t_f - t_0) / num as f64;
    if !t_s.is_finite() {
        debug!(t_0, t_f, "rejecting time span that overflows");
        return Err(SolverError::InvalidArgument {
            name: "t_f",
            reason: "span from t_0 overflows",
        });
    }
    Ok(DVector::from_fn(num + 1, |k, _| t_0 + k as f64 * t_s))
}

/// Time-aligned phase and phase-velocity samples of one junction run
///
/// Only built by [`JunctionParams::trajectory`], so the three series always
/// hold the same, non-zero number of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: DVector<f64>,
    phi: DVector<f64>,
    phi_dot: DVector<f64>,
    step_size: f64,
}

impl Trajectory {
    /// Time grid
    pub fn time(&self) -> &DVector<f64> {
        &self.time
    }

    /// Phase samples
    pub fn phi(&self) -> &DVector<f64> {
        &self.phi
    }

    /// Phase-velocity samples
    pub fn phi_dot(&self) -> &DVector<f64> {
        &self.phi_dot
    }

    /// Number of samples, `num + 1`
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Uniform spacing of the time grid
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// State at sample `k`, if it exists
    pub fn state(&self, k: usize) -> Option<JunctionState> {
        let phi = self.phi.get(k)?;
        let phi_dot = self.phi_dot.get(k)?;
        Some(JunctionState::new(*phi, *phi_dot))
    }

    /// State at the last grid point
    pub fn final_state(&self) -> JunctionState {
        let last = self.len() - 1;
        JunctionState::new(self.phi[last], self.phi_dot[last])
    }

    /// Iterate over `(t, state)` pairs in time order
    pub fn iter(&self) -> impl Iterator<Item = (f64, JunctionState)> + '_ {
        self.time
            .iter()
            .zip(self.phi.iter().zip(self.phi_dot.iter()))
            .map(|(&t, (&phi, &phi_dot))| (t, JunctionState::new(phi, phi_dot)))
    }

    /// Split into `(phi, phi_dot, time)`
    pub fn into_parts(self) -> (DVector<f64>, DVector<f64>, DVector<f64>) {
        (self.phi, self.phi_dot, self.time)
    }
}

/// Phase trajectory of a junction starting at rest
///
/// Integrates `num` forward Euler steps of size `(t_f - t_0) / num` with
/// damping `damp` and drive `i`. Fails with
/// [`SolverError::InvalidArgument`] when `num == 0` or a bound is not
/// finite, and with [`SolverError::NonFiniteAt`] if the solution diverges.
pub fn junction(t_0: f64, t_f: f64, num: usize, damp: f64, i: f64) -> Result<Trajectory> {
    JunctionParams::new(damp, i).trajectory(t_0, t_f, num)
}

/// Single forward Euler step from `(p_0, pd_0)`, returns `(phi, phi_dot)`
///
/// `dt` is not validated and may be negative.
pub fn junction_step(p_0: f64, pd_0: f64, dt: f64, damp: f64, i: f64) -> Result<(f64, f64)> {
    let next = JunctionParams::new(damp, i).step(JunctionState::new(p_0, pd_0), dt)?;
    Ok((next.phi, next.phi_dot))
}
