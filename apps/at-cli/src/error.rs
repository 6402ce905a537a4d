//! Error type for the command-line front end.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Aircraft file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Solver error: {0}")]
    Solver(#[from] at_solver::SolverError),
}

pub type CliResult<T> = Result<T, CliError>;
