//! Model defaults and numeric tolerances

/// Default junction damping coefficient
pub const JJ_DAMPING: f64 = 0.5;

/// Default junction drive current, normalised to the critical current
pub const JJ_DRIVE: f64 = 0.8;

/// Default potentiation amplitude of the STDP rule
pub const STDP_AMPLITUDE_POT: f64 = 1.0;

/// Default depression amplitude of the STDP rule
pub const STDP_AMPLITUDE_DEP: f64 = 1.0;

/// Default STDP time constant
pub const STDP_TAU: f64 = 1.0;

/// Default synapse circuit gamma
pub const SYN_GAMMA: f64 = 1.0;

/// Default synapse resonant frequency
pub const SYN_OMEGA: f64 = 1.0;

/// Default synapse quality factor
pub const SYN_Q: f64 = 0.5;

/// Default synapse coupling inductance ratio
pub const SYN_LAMBDA: f64 = 0.5;

/// Default synaptic inductance ratio, must stay away from 0 and 1
pub const SYN_LAMBDA_SYN: f64 = 0.25;

/// Default synapse resistance ratio
pub const SYN_R12: f64 = 1.0;

/// Tolerance used when comparing trajectories produced by different paths
pub const TOLERANCE: f64 = 1e-12;
