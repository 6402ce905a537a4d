//! Aircraft and flight-condition input records.

use crate::error::{SolverError, SolverResult};
use serde::{Deserialize, Serialize};

/// Longitudinal aerodynamic derivatives.
///
/// Three rows of dimensionless coefficients, one per equation family.
/// Columns are the constant term, the angle-of-attack slope, and the
/// elevator slope, so e.g. `lift = [CL0, CL_alpha, CL_eta]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalDerivatives {
    /// Drag row [CD0, CD_alpha, CD_eta]
    pub drag: [f64; 3],
    /// Lift row [CL0, CL_alpha, CL_eta]
    pub lift: [f64; 3],
    /// Pitching moment row [Cm0, Cm_alpha, Cm_eta]
    pub moment: [f64; 3],
}

impl LongitudinalDerivatives {
    /// Drag coefficient at a state.
    pub fn cd(&self, alpha: f64, elevator: f64) -> f64 {
        self.drag[0] + self.drag[1] * alpha + self.drag[2] * elevator
    }

    /// Lift coefficient at a state.
    pub fn cl(&self, alpha: f64, elevator: f64) -> f64 {
        self.lift[0] + self.lift[1] * alpha + self.lift[2] * elevator
    }

    /// Pitching moment coefficient at a state.
    pub fn cm(&self, alpha: f64, elevator: f64) -> f64 {
        self.moment[0] + self.moment[1] * alpha + self.moment[2] * elevator
    }

    pub fn cd_alpha(&self) -> f64 {
        self.drag[1]
    }

    pub fn cd_elevator(&self) -> f64 {
        self.drag[2]
    }

    pub fn cl_alpha(&self) -> f64 {
        self.lift[1]
    }

    pub fn cl_elevator(&self) -> f64 {
        self.lift[2]
    }

    pub fn cm_alpha(&self) -> f64 {
        self.moment[1]
    }

    pub fn cm_elevator(&self) -> f64 {
        self.moment[2]
    }

    fn validate(&self) -> SolverResult<()> {
        for (row, name) in [
            (&self.drag, "drag"),
            (&self.lift, "lift"),
            (&self.moment, "moment"),
        ] {
            for (col, value) in row.iter().enumerate() {
                check_finite(*value, &format!("{} derivative column {}", name, col))?;
            }
        }
        Ok(())
    }
}

/// Physical and aerodynamic description of one aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftParams {
    pub name: String,
    /// Mass (kg)
    pub mass: f64,
    /// Mean wing chord (m)
    pub mean_chord: f64,
    /// Reference wing area (m^2)
    pub wing_area: f64,
    /// Angle between thrust axis and fuselage datum (rad)
    pub thrust_mount_angle: f64,
    /// Vertical offset of the thrust line from the center of gravity (m)
    pub thrust_lever_arm: f64,
    /// Maximum total thrust (N)
    pub max_thrust: f64,
    pub derivatives: LongitudinalDerivatives,
}

impl AircraftParams {
    /// Airbus A300 reference data.
    ///
    /// Subsonic cruise derivative set from Brockhaus/Alles/Luckner,
    /// Flugregelung, pp. 906-909.
    pub fn a300() -> Self {
        Self {
            name: "Airbus A300".to_string(),
            mass: 130_000.0,
            mean_chord: 6.6,
            wing_area: 260.0,
            thrust_mount_angle: 2.17_f64.to_radians(),
            thrust_lever_arm: 2.65,
            max_thrust: 452_000.0,
            derivatives: LongitudinalDerivatives {
                drag: [0.023, 0.219, 0.0068],
                lift: [0.341, 6.22, 0.194],
                moment: [-0.0092, -1.081, -0.771],
            },
        }
    }

    /// Check every physical input for this aircraft.
    pub fn validate(&self) -> SolverResult<()> {
        check_positive(self.mass, "mass")?;
        check_positive(self.mean_chord, "mean_chord")?;
        check_positive(self.wing_area, "wing_area")?;
        check_positive(self.max_thrust, "max_thrust")?;
        check_finite(self.thrust_mount_angle, "thrust_mount_angle")?;
        check_finite(self.thrust_lever_arm, "thrust_lever_arm")?;
        self.derivatives.validate()
    }
}

/// Flight condition to trim for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightCondition {
    /// True airspeed (m/s)
    pub airspeed: f64,
    /// Air density (kg/m^3)
    pub air_density: f64,
    /// Flight path angle (rad); positive climbs, negative descends
    pub flight_path_angle: f64,
}

impl FlightCondition {
    /// Check every physical input for this condition.
    pub fn validate(&self) -> SolverResult<()> {
        check_positive(self.airspeed, "airspeed")?;
        check_positive(self.air_density, "air_density")?;
        check_finite(self.flight_path_angle, "flight_path_angle")
    }
}

fn check_positive(value: f64, what: &str) -> SolverResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidInput {
            what: format!("{} must be positive, got {}", what, value),
        })
    }
}

fn check_finite(value: f64, what: &str) -> SolverResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SolverError::InvalidInput {
            what: format!("{} must be finite, got {}", what, value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a300_is_valid() {
        let aircraft = AircraftParams::a300();
        assert!(aircraft.validate().is_ok());
        assert!((aircraft.thrust_mount_angle - 0.0378736).abs() < 1e-6);
    }

    #[test]
    fn coefficient_evaluation() {
        let d = AircraftParams::a300().derivatives;
        assert_eq!(d.cl(0.0, 0.0), 0.341);
        assert!((d.cl(0.1, -0.05) - (0.341 + 0.622 - 0.0097)).abs() < 1e-12);
        assert_eq!(d.cm_alpha(), -1.081);
        assert_eq!(d.cd_elevator(), 0.0068);
    }

    #[test]
    fn rejects_nonpositive_fields() {
        let mut aircraft = AircraftParams::a300();
        aircraft.mass = 0.0;
        let err = aircraft.validate().unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput { .. }));
        assert!(err.to_string().contains("mass"));

        let mut aircraft = AircraftParams::a300();
        aircraft.wing_area = -260.0;
        assert!(aircraft.validate().is_err());

        let mut aircraft = AircraftParams::a300();
        aircraft.max_thrust = f64::NAN;
        assert!(aircraft.validate().is_err());
    }

    #[test]
    fn rejects_nonfinite_derivative() {
        let mut aircraft = AircraftParams::a300();
        aircraft.derivatives.moment[1] = f64::INFINITY;
        let err = aircraft.validate().unwrap_err();
        assert!(err.to_string().contains("moment"));
    }

    #[test]
    fn rejects_bad_flight_condition() {
        let condition = FlightCondition {
            airspeed: 0.0,
            air_density: 1.225,
            flight_path_angle: 0.0,
        };
        assert!(condition.validate().is_err());

        let condition = FlightCondition {
            airspeed: 264.0,
            air_density: -1.0,
            flight_path_angle: 0.0,
        };
        assert!(condition.validate().is_err());

        let condition = FlightCondition {
            airspeed: 264.0,
            air_density: 0.412706,
            flight_path_angle: f64::NAN,
        };
        assert!(condition.validate().is_err());
    }

    #[test]
    fn aircraft_file_format() {
        let text = "\
name: Test Glider
mass: 750.0
mean_chord: 1.2
wing_area: 14.0
thrust_mount_angle: 0.0
thrust_lever_arm: 0.4
max_thrust: 5000.0
derivatives:
  drag: [0.015, 0.12, 0.002]
  lift: [0.4, 5.8, 0.21]
  moment: [-0.01, -0.9, -0.65]
";
        let aircraft: AircraftParams = serde_yaml::from_str(text).unwrap();
        assert_eq!(aircraft.name, "Test Glider");
        assert_eq!(aircraft.derivatives.lift[1], 5.8);
        assert!(aircraft.validate().is_ok());

        // A wrong-length row is rejected at parse time
        let bad = text.replace("[0.015, 0.12, 0.002]", "[0.015, 0.12]");
        assert!(serde_yaml::from_str::<AircraftParams>(&bad).is_err());
    }
}
