//! Walk through the Airbus A300 reference case from Brockhaus/Alles/Luckner,
//! Flugregelung, pp. 906-909, and print the full iteration history.
//!
//! Run with: cargo run -p at-solver --example a300

use at_solver::{
    AircraftParams, FlightCondition, ReportMode, SolverResult, TrimProblem, render,
    solve_with_trace,
};

fn main() -> SolverResult<()> {
    let problem = TrimProblem::new(
        AircraftParams::a300(),
        FlightCondition {
            airspeed: 264.0,
            air_density: 0.412706,
            flight_path_angle: 0.0,
        },
    );

    let (solution, trace) = solve_with_trace(&problem, None)?;

    if let Some(text) = render(ReportMode::All, &problem, &solution, &trace) {
        print!("{}", text);
    }

    println!();
    println!("Reference: AoA ~0 deg, elevator ~0 deg, thrust ~20% of 452 kN");
    println!(
        "Computed:  AoA {:.4} deg, elevator {:.4} deg, thrust {:.1}% ({:.1} kN)",
        solution.alpha.to_degrees(),
        solution.elevator.to_degrees(),
        100.0 * solution.thrust / problem.aircraft.max_thrust,
        solution.thrust / 1000.0
    );
    println!(
        "Converged: {} ({} iterations, error {:.2e})",
        solution.converged, solution.iterations, solution.final_error
    );

    Ok(())
}
