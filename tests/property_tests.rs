//! Property-based tests using proptest
//!
//! Invariants of the time grid, the junction integrators and the STDP rule
//! that should hold for all inputs within a given domain.

use jjsim::prelude::*;
use jjsim::utils::constants::TOLERANCE;
use proptest::prelude::*;

proptest! {
    // Property: the grid has num + 1 uniformly spaced points from t_0
    #[test]
    fn test_grid_shape(t_0 in -100.0f64..100.0, span in 1e-3f64..100.0, num in 1usize..500) {
        let t_f = t_0 + span;
        let grid = time_grid(t_0, t_f, num).unwrap();
        let t_s = (t_f - t_0) / num as f64;

        prop_assert_eq!(grid.len(), num + 1);
        prop_assert_eq!(grid[0], t_0);
        for k in 1..grid.len() {
            let gap = grid[k] - grid[k - 1];
            prop_assert!((gap - t_s).abs() <= 1e-9 * (1.0 + t_s.abs() + t_0.abs()));
        }
        prop_assert!((grid[num] - t_f).abs() <= 1e-9 * (1.0 + t_f.abs()));
    }

    // Property: every trajectory starts at rest regardless of damping and drive
    #[test]
    fn test_trajectory_starts_at_origin(damp in -2.0f64..2.0, i in -3.0f64..3.0, num in 1usize..100) {
        let traj = junction(0.0, 1.0, num, damp, i).unwrap();
        prop_assert_eq!(traj.len(), num + 1);
        prop_assert_eq!(traj.phi()[0], 0.0);
        prop_assert_eq!(traj.phi_dot()[0], 0.0);
    }

    // Property: stepping from rest reproduces the batch trajectory
    #[test]
    fn test_step_matches_batch(
        span in 0.1f64..10.0,
        num in 1usize..300,
        damp in 0.0f64..2.0,
        i in -2.0f64..2.0,
    ) {
        let traj = junction(0.0, span, num, damp, i).unwrap();
        let t_s = span / num as f64;

        let (mut phi, mut phi_dot) = (0.0, 0.0);
        for j in 1..=num {
            (phi, phi_dot) = junction_step(phi, phi_dot, t_s, damp, i).unwrap();
            prop_assert!((phi - traj.phi()[j]).abs() <= TOLERANCE * (1.0 + phi.abs()));
            prop_assert!((phi_dot - traj.phi_dot()[j]).abs() <= TOLERANCE * (1.0 + phi_dot.abs()));
        }
    }

    // Property: the sign of dw follows the sign of the timing gap
    #[test]
    fn test_stdp_sign(
        a in 1e-3f64..10.0,
        b in 1e-3f64..10.0,
        tau in 0.1f64..10.0,
        t1 in -10.0f64..10.0,
        t0 in -10.0f64..10.0,
    ) {
        let dw = change_weights(a, b, tau, t1, t0).unwrap();
        if t1 - t0 > 0.0 {
            prop_assert!(dw > 0.0 && dw <= a);
        } else {
            prop_assert!(dw < 0.0 && dw >= -b);
        }
    }
}
