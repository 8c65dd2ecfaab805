//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::{StateError, TreeError};
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    State(#[from] StateError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tree(_) => exitcode::DATAERR,
            CliError::State(e) => match e {
                StateError::Io { .. } => exitcode::NOINPUT,
                StateError::Parse { .. } => exitcode::DATAERR,
            },
            CliError::Config(_) => exitcode::CONFIG,
            CliError::Io(_) => exitcode::IOERR,
        }
    }
}
