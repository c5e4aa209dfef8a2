//! Forward Euler method for numerical integration

use nalgebra::DVector;

use super::{ExplicitSolver, Result, Solver};

/// Explicit forward Euler method
///
/// First-order, single-stage explicit integration method.
///
/// # Mathematical Form
/// ```text
/// x_{n+1} = x_n + h * f(x_n, t_n)
/// ```
///
/// # Characteristics
/// - Order: 1
/// - Stages: 1
/// - Explicit, fixed timestep
/// - Not A-stable
///
/// # Note
/// The junction trajectory and the single-step junction update are both
/// this scheme; the slope is always evaluated at the start of the step.
#[derive(Debug, Clone)]
pub struct Euler {
    state: DVector<f64>,
}

impl Euler {
    /// Create a new Euler solver with the given initial state
    pub fn new(initial: DVector<f64>) -> Self {
        Self { state: initial }
    }
}

impl Solver for Euler {
    fn state(&self) -> &DVector<f64> {
        &self.state
    }
}

impl ExplicitSolver for Euler {
    fn step<F>(&mut self, mut f: F, dt: f64) -> Result<()>
    where
        F: FnMut(&DVector<f64>, f64) -> DVector<f64>,
    {
        // x_{n+1} = x_n + f(x_n) * dt, slope taken at the start of the step
        let slope = f(&self.state, 0.0);
        self.state = self.state.zip_map(&slope, |x, dx| x + dx * dt);

        Ok(())
    }
}
