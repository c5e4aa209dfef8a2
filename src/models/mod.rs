//! Oscillator and synapse model formulas
//!
//! - Junction phase dynamics (trajectory and single step)
//! - Pulse/control coupling currents
//! - STDP weight update
//! - Coupled voltage/current synapse step

mod coupling;
mod junction;
mod plasticity;
mod synapse;

pub use coupling::{currents, CouplingParams};
pub use junction::{
    dynamics, junction, junction_step, time_grid, JunctionParams, JunctionState, Trajectory,
};
pub use plasticity::{change_weights, StdpBranch, StdpParams};
pub use synapse::{synapse_step, SynapseDrive, SynapseParams, SynapseState};
