//! High-level trim solve interface.

use crate::equations::TrimEquations;
use crate::error::SolverResult;
use crate::newton::{NewtonConfig, newton_solve};
use crate::problem::TrimProblem;
use crate::trace::TrimTrace;
use serde::Serialize;
use tracing::warn;

/// Trimmed flight state, or the best iterate if convergence failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimSolution {
    /// Angle of attack (rad)
    pub alpha: f64,
    /// Elevator deflection (rad)
    pub elevator: f64,
    /// Total thrust (N)
    pub thrust: f64,
    /// Airspeed per unit thrust (s/kg); exactly 0 for gliding flight
    pub efficiency: f64,
    /// Newton steps taken
    pub iterations: usize,
    /// Whether the relative step error dropped below tolerance
    pub converged: bool,
    /// Relative error of the last step (NaN if no step ran)
    pub final_error: f64,
}

/// Solve a trim problem.
///
/// Validates the inputs, then runs Newton iteration from the configured
/// initial guess. A solve that exhausts the iteration cap logs a warning
/// and still returns the last iterate, flagged `converged = false`; the
/// caller decides whether to accept it or retry from a different guess.
pub fn solve(problem: &TrimProblem, config: Option<NewtonConfig>) -> SolverResult<TrimSolution> {
    let config = config.unwrap_or_default();
    solve_internal(problem, &config, None)
}

/// Solve a trim problem, keeping the per-iteration history.
pub fn solve_with_trace(
    problem: &TrimProblem,
    config: Option<NewtonConfig>,
) -> SolverResult<(TrimSolution, TrimTrace)> {
    let config = config.unwrap_or_default();
    let mut trace = TrimTrace::with_capacity(config.max_iterations);
    let solution = solve_internal(problem, &config, Some(&mut trace))?;
    Ok((solution, trace))
}

fn solve_internal(
    problem: &TrimProblem,
    config: &NewtonConfig,
    trace: Option<&mut TrimTrace>,
) -> SolverResult<TrimSolution> {
    problem.validate()?;

    let equations = TrimEquations::new(problem, config.gravity);
    let result = newton_solve(
        |x| equations.residual(x),
        |x| equations.jacobian(x),
        config,
        trace,
    )?;

    if !result.converged {
        warn!(
            "trim iteration cap of {} reached, error {:.3e} still above tolerance {:.1e}; returning last iterate",
            config.max_iterations, result.final_error, config.tolerance
        );
    }

    let thrust = result.x[2];
    // Exactly zero thrust means gliding flight; near-zero thrust divides
    // through and yields a large efficiency on purpose.
    let efficiency = if thrust == 0.0 {
        0.0
    } else {
        problem.flight.airspeed / thrust
    };

    Ok(TrimSolution {
        alpha: result.x[0],
        elevator: result.x[1],
        thrust,
        efficiency,
        iterations: result.iterations,
        converged: result.converged,
        final_error: result.final_error,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::aircraft::{AircraftParams, FlightCondition};
    use crate::newton::STANDARD_GRAVITY;
    use nalgebra::Vector3;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cruise_neighborhood_converges(
            airspeed in 180.0_f64..300.0,
            air_density in 0.3_f64..1.2,
            flight_path_angle in -0.05_f64..0.05,
        ) {
            let problem = TrimProblem::new(
                AircraftParams::a300(),
                FlightCondition { airspeed, air_density, flight_path_angle },
            );

            let solution = solve(&problem, None).unwrap();
            prop_assert!(solution.converged);

            // The returned state has to satisfy the equilibrium itself,
            // independent of the solver's own step-based error metric.
            let equations = TrimEquations::new(&problem, STANDARD_GRAVITY);
            let x = Vector3::new(solution.alpha, solution.elevator, solution.thrust);
            let weight = problem.aircraft.mass * STANDARD_GRAVITY;
            prop_assert!(equations.residual(&x).norm() <= 1e-6 * weight);

            if solution.thrust == 0.0 {
                prop_assert_eq!(solution.efficiency, 0.0);
            } else {
                prop_assert_eq!(solution.efficiency, airspeed / solution.thrust);
            }
        }
    }
}
