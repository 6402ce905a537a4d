//! Trim problem definition.

use crate::aircraft::{AircraftParams, FlightCondition};
use crate::error::SolverResult;
use serde::{Deserialize, Serialize};

/// One aircraft in one flight condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimProblem {
    pub aircraft: AircraftParams,
    pub flight: FlightCondition,
}

impl TrimProblem {
    pub fn new(aircraft: AircraftParams, flight: FlightCondition) -> Self {
        Self { aircraft, flight }
    }

    /// Check every physical input, so a solve can fail before iterating.
    pub fn validate(&self) -> SolverResult<()> {
        self.aircraft.validate()?;
        self.flight.validate()
    }
}
