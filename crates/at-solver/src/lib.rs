//! Longitudinal trim solver for fixed-wing aircraft.
//!
//! Finds the angle of attack, elevator deflection, and thrust that hold an
//! aircraft in steady, unaccelerated flight along a given flight path. The
//! three equilibrium equations (vertical force, horizontal force, pitching
//! moment) are solved with Newton iteration using an analytic Jacobian and
//! an exact 3x3 linear solve per step.

pub mod aircraft;
pub mod equations;
pub mod error;
pub mod newton;
pub mod problem;
pub mod report;
pub mod solve;
pub mod trace;

pub use aircraft::{AircraftParams, FlightCondition, LongitudinalDerivatives};
pub use equations::TrimEquations;
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult, STANDARD_GRAVITY};
pub use problem::TrimProblem;
pub use report::{ReportMode, render};
pub use solve::{TrimSolution, solve, solve_with_trace};
pub use trace::TrimTrace;
