//! Error types for trim solving.

use thiserror::Error;

/// Errors that can occur while setting up or running a trim solve.
///
/// Running out of iterations is not an error; see
/// [`TrimSolution::converged`](crate::TrimSolution).
#[derive(Error, Debug, Clone)]
pub enum SolverError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Singular Jacobian at iteration {iteration}")]
    SingularJacobian { iteration: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::InvalidInput {
            what: "mass must be positive, got -3".to_string(),
        };
        assert!(err.to_string().contains("mass must be positive"));

        let err = SolverError::SingularJacobian { iteration: 2 };
        assert!(err.to_string().contains("iteration 2"));
    }
}
