//! Residual and Jacobian of the longitudinal trim equations.

use crate::aircraft::LongitudinalDerivatives;
use crate::problem::TrimProblem;
use nalgebra::{Matrix3, Vector3};

/// Trim equilibrium equations, evaluated at a state vector
/// x = [angle of attack (rad), elevator deflection (rad), thrust (N)].
///
/// Everything that stays constant across iterations is fixed at
/// construction: weight, the aerodynamic unit force E = rho/2 * V^2 * S,
/// and the thrust geometry. Evaluation is then allocation-free.
pub struct TrimEquations {
    /// Aerodynamic unit force (N)
    unit_force: f64,
    /// Aircraft weight m * g (N)
    weight: f64,
    /// Mean wing chord (m)
    chord: f64,
    /// Thrust mounting angle (rad)
    mount_angle: f64,
    /// Thrust contribution to the pitch balance, z_f * cos(mount angle) (m)
    moment_arm: f64,
    cos_gamma: f64,
    sin_gamma: f64,
    derivatives: LongitudinalDerivatives,
}

impl TrimEquations {
    pub fn new(problem: &TrimProblem, gravity: f64) -> Self {
        let aircraft = &problem.aircraft;
        let flight = &problem.flight;
        Self {
            unit_force: 0.5 * flight.air_density * flight.airspeed * flight.airspeed
                * aircraft.wing_area,
            weight: aircraft.mass * gravity,
            chord: aircraft.mean_chord,
            mount_angle: aircraft.thrust_mount_angle,
            moment_arm: aircraft.thrust_lever_arm * aircraft.thrust_mount_angle.cos(),
            cos_gamma: flight.flight_path_angle.cos(),
            sin_gamma: flight.flight_path_angle.sin(),
            derivatives: aircraft.derivatives,
        }
    }

    /// Equilibrium residual R(x), zero at trim.
    ///
    /// Rows: vertical force balance, horizontal force balance, pitching
    /// moment balance, all in the aerodynamic frame.
    pub fn residual(&self, x: &Vector3<f64>) -> Vector3<f64> {
        let (alpha, elevator, thrust) = (x[0], x[1], x[2]);
        let d = &self.derivatives;
        let (sin_ta, cos_ta) = (alpha + self.mount_angle).sin_cos();

        Vector3::new(
            self.weight * self.cos_gamma
                - self.unit_force * d.cl(alpha, elevator)
                - thrust * sin_ta,
            -self.weight * self.sin_gamma - self.unit_force * d.cd(alpha, elevator)
                + thrust * cos_ta,
            self.unit_force * self.chord * d.cm(alpha, elevator) + thrust * self.moment_arm,
        )
    }

    /// Analytic Jacobian dR/dx at a state.
    pub fn jacobian(&self, x: &Vector3<f64>) -> Matrix3<f64> {
        let (alpha, thrust) = (x[0], x[2]);
        let d = &self.derivatives;
        let (sin_ta, cos_ta) = (alpha + self.mount_angle).sin_cos();

        Matrix3::new(
            -self.unit_force * d.cl_alpha() - thrust * cos_ta,
            -self.unit_force * d.cl_elevator(),
            -sin_ta,
            -self.unit_force * d.cd_alpha() - thrust * sin_ta,
            -self.unit_force * d.cd_elevator(),
            cos_ta,
            self.unit_force * self.chord * d.cm_alpha(),
            self.unit_force * self.chord * d.cm_elevator(),
            self.moment_arm,
        )
    }
}
