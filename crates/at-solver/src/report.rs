//! Human-readable rendering of trim results.
//!
//! Pure formatting over a finished solve; nothing here can influence the
//! iteration itself.

use crate::problem::TrimProblem;
use crate::solve::TrimSolution;
use crate::trace::TrimTrace;

/// How much of a solve to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Input echo plus one row per Newton step.
    All,
    /// One summary row for the final state.
    Last,
    /// No output.
    Silent,
}

/// Render a finished solve. Returns `None` in silent mode.
pub fn render(
    mode: ReportMode,
    problem: &TrimProblem,
    solution: &TrimSolution,
    trace: &TrimTrace,
) -> Option<String> {
    match mode {
        ReportMode::All => Some(render_all(problem, solution, trace)),
        ReportMode::Last => Some(render_last(problem, solution)),
        ReportMode::Silent => None,
    }
}

fn render_all(problem: &TrimProblem, solution: &TrimSolution, trace: &TrimTrace) -> String {
    let mut out = String::new();
    let aircraft = &problem.aircraft;
    let flight = &problem.flight;

    out.push_str(&format!("Trim of {}\n", aircraft.name));
    out.push_str(&format!("  True airspeed:     {:.3} m/s\n", flight.airspeed));
    out.push_str(&format!(
        "  Air density:       {:.6} kg/m^3\n",
        flight.air_density
    ));
    out.push_str(&format!(
        "  Flight path angle: {:.3} deg\n",
        flight.flight_path_angle.to_degrees()
    ));
    out.push('\n');

    out.push_str(&format!(
        "  {:>4}  {:>10}  {:>12}  {:>14}  {:>10}\n",
        "Step", "Rel error", "AoA (deg)", "Elevator (deg)", "Thrust (%)"
    ));
    for (k, state) in trace.states().iter().enumerate() {
        out.push_str(&format!(
            "  {:>4}  {:>10}  {:>12.6}  {:>14.6}  {:>10.6}\n",
            k,
            error_cell(trace.step_error(k)),
            state[0].to_degrees(),
            state[1].to_degrees(),
            100.0 * state[2] / aircraft.max_thrust
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "  Efficiency VA/F: {:.3e} s/kg\n",
        solution.efficiency
    ));
    out
}

fn render_last(problem: &TrimProblem, solution: &TrimSolution) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "  {:>5}  {:>10}  {:>10}  {:>12}  {:>14}  {:>10}\n",
        "Steps", "Rel error", "VA/F", "AoA (deg)", "Elevator (deg)", "Thrust (%)"
    ));
    out.push_str(&format!(
        "  {:>5}  {:>10}  {:>10.3e}  {:>12.6}  {:>14.6}  {:>10.6}\n",
        solution.iterations,
        error_cell(Some(solution.final_error).filter(|e| !e.is_nan())),
        solution.efficiency,
        solution.alpha.to_degrees(),
        solution.elevator.to_degrees(),
        100.0 * solution.thrust / problem.aircraft.max_thrust
    ));
    out
}

fn error_cell(error: Option<f64>) -> String {
    match error {
        Some(e) => format!("{:.2e}", e),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::{AircraftParams, FlightCondition};
    use crate::solve::solve_with_trace;

    fn solved_a300() -> (TrimProblem, TrimSolution, TrimTrace) {
        let problem = TrimProblem::new(
            AircraftParams::a300(),
            FlightCondition {
                airspeed: 264.0,
                air_density: 0.412706,
                flight_path_angle: 0.0,
            },
        );
        let (solution, trace) = solve_with_trace(&problem, None).unwrap();
        (problem, solution, trace)
    }

    #[test]
    fn all_mode_lists_every_state() {
        let (problem, solution, trace) = solved_a300();
        let text = render(ReportMode::All, &problem, &solution, &trace).unwrap();

        assert!(text.contains("Trim of Airbus A300"));
        assert!(text.contains("True airspeed"));
        assert!(text.contains("Thrust (%)"));
        assert!(text.contains("Efficiency VA/F"));

        // One row per state: header block, column header, states, footer
        let state_rows = text
            .lines()
            .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
            .count();
        assert_eq!(state_rows, trace.states().len());
    }

    #[test]
    fn initial_guess_row_has_no_error() {
        let (problem, solution, trace) = solved_a300();
        let text = render(ReportMode::All, &problem, &solution, &trace).unwrap();

        let first_row = text
            .lines()
            .find(|line| line.trim_start().starts_with('0'))
            .unwrap();
        assert!(first_row.contains('-'));
    }

    #[test]
    fn last_mode_is_a_single_row() {
        let (problem, solution, trace) = solved_a300();
        let text = render(ReportMode::Last, &problem, &solution, &trace).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("VA/F"));
        assert!(text.contains(&format!("{}", solution.iterations)));
    }

    #[test]
    fn silent_mode_renders_nothing() {
        let (problem, solution, trace) = solved_a300();
        assert!(render(ReportMode::Silent, &problem, &solution, &trace).is_none());
    }
}
