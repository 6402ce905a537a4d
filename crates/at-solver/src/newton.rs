//! Newton iteration for the three-variable trim system.

use crate::error::{SolverError, SolverResult};
use crate::trace::TrimTrace;
use nalgebra::{Matrix3, Vector3};
use tracing::debug;

/// Standard gravitational acceleration (m/s^2).
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Newton solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct NewtonConfig {
    /// Gravitational acceleration (m/s^2)
    pub gravity: f64,
    /// Starting state [angle of attack (rad), elevator (rad), thrust (N)]
    pub initial_guess: Vector3<f64>,
    /// Relative step tolerance |dx| / |x|
    pub tolerance: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            initial_guess: Vector3::new(0.0, 0.0, 1000.0),
            tolerance: 1e-8,
            max_iterations: 16,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone)]
pub struct NewtonResult {
    /// Final state vector
    pub x: Vector3<f64>,
    /// Number of steps taken
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
    /// Relative error of the last step (NaN if no step ran)
    pub final_error: f64,
}

/// Newton iteration with full-length steps.
///
/// Each step solves J * dx = -r exactly and applies all of dx; there is
/// no damping or line search, so a poor initial guess can diverge until
/// the iteration cap stops it. Convergence is judged on the relative
/// step norm |dx| / |x| falling below `config.tolerance`. Exhausting
/// `config.max_iterations` is not an error: the last iterate is returned
/// with `converged` unset.
pub fn newton_solve<R, J>(
    residual_fn: R,
    jacobian_fn: J,
    config: &NewtonConfig,
    mut trace: Option<&mut TrimTrace>,
) -> SolverResult<NewtonResult>
where
    R: Fn(&Vector3<f64>) -> Vector3<f64>,
    J: Fn(&Vector3<f64>) -> Matrix3<f64>,
{
    let mut x = config.initial_guess;
    let mut iterations = 0;
    let mut converged = false;
    let mut final_error = f64::NAN;

    if let Some(t) = trace.as_deref_mut() {
        t.record_initial(x);
    }

    for iter in 0..config.max_iterations {
        let r = residual_fn(&x);
        let jac = jacobian_fn(&x);

        // Solve J * dx = -r
        let dx = jac
            .lu()
            .solve(&(-r))
            .ok_or(SolverError::SingularJacobian { iteration: iter })?;

        x += dx;
        iterations = iter + 1;
        final_error = dx.norm() / x.norm();

        debug!(
            "step {}: error {:.3e}, alpha {:.6} rad, elevator {:.6} rad, thrust {:.1} N",
            iterations, final_error, x[0], x[1], x[2]
        );

        if let Some(t) = trace.as_deref_mut() {
            t.record_step(x, final_error);
        }

        if final_error < config.tolerance {
            converged = true;
            break;
        }
    }

    Ok(NewtonResult {
        x,
        iterations,
        converged,
        final_error,
    })
}
