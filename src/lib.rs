//! jjsim - Explicit integrators for Josephson-junction neuron models
//!
//! Closed-form update formulas for superconducting neuron circuits:
//! Josephson-junction phase dynamics, the coupling currents between a pulse
//! and a control junction, a spike-timing-dependent plasticity rule, and a
//! coupled voltage/current synapse.
//!
//! # Architecture
//!
//! - Every model is a pure function of its arguments, with a typed
//!   parameter struct offering the same formula as a method
//! - Time integration uses the explicit forward Euler scheme
//! - Invalid arguments and non-finite results are reported as
//!   [`SolverError`] instead of propagating NaN or infinity
//!
//! # Example
//!
//! ```rust
//! use jjsim::prelude::*;
//!
//! // Batch trajectory of a junction driven below its critical current
//! let traj = junction(0.0, 10.0, 1000, 0.5, 0.5)?;
//! assert_eq!(traj.len(), 1001);
//!
//! // The same run driven one step at a time
//! let t_s = traj.step_size();
//! let (mut phi, mut phi_dot) = (0.0, 0.0);
//! for _ in 0..1000 {
//!     (phi, phi_dot) = junction_step(phi, phi_dot, t_s, 0.5, 0.5)?;
//! }
//! assert!((phi - traj.final_state().phi).abs() < jjsim::utils::constants::TOLERANCE);
//! # Ok::<(), jjsim::SolverError>(())
//! ```

pub mod models;
pub mod solvers;
pub mod utils;

pub use models::*;
pub use solvers::{Result, SolverError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::models::*;
    pub use crate::solvers::{Euler, ExplicitSolver, Solver, SolverError};
}
