//! Per-iteration history of a trim solve.

use nalgebra::Vector3;

/// Iteration history, recorded only when asked for.
///
/// A solve that takes n steps stores n + 1 states (the first one is the
/// initial guess) and n relative step errors. The error at index k - 1
/// belongs to the step from state k - 1 to state k, so the initial guess
/// has no error of its own.
#[derive(Debug, Clone, Default)]
pub struct TrimTrace {
    states: Vec<Vector3<f64>>,
    errors: Vec<f64>,
}

impl TrimTrace {
    /// Empty trace with room for a full run of `max_iterations` steps.
    pub fn with_capacity(max_iterations: usize) -> Self {
        Self {
            states: Vec::with_capacity(max_iterations + 1),
            errors: Vec::with_capacity(max_iterations),
        }
    }

    pub(crate) fn record_initial(&mut self, x: Vector3<f64>) {
        self.states.push(x);
    }

    pub(crate) fn record_step(&mut self, x: Vector3<f64>, error: f64) {
        self.states.push(x);
        self.errors.push(error);
    }

    /// All candidate states, starting with the initial guess.
    pub fn states(&self) -> &[Vector3<f64>] {
        &self.states
    }

    /// Relative step errors, one per step.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.errors.len()
    }

    /// Relative error of arriving at state `k`; `None` for the initial
    /// guess and for indices past the last state.
    pub fn step_error(&self, k: usize) -> Option<f64> {
        if k == 0 {
            None
        } else {
            self.errors.get(k - 1).copied()
        }
    }
}
