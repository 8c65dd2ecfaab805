use std::path::PathBuf;
use thiserror::Error;

use crate::model::CategoryId;

/// Errors raised while constructing a category tree.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cycle detected in category hierarchy at: {0}")]
    CycleDetected(CategoryId),

    #[error("internal tree operation failed: {0}")]
    InternalError(String),
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised while loading application state or locale files from disk.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StateResult<T> = Result<T, StateError>;
