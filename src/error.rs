//! Fatal error conditions.
//!
//! Bad user input never reaches this type: it is handled where it is read,
//! by printing a message and asking again.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to read task file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write task file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode task list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("input closed before the session ended")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, TaskError>;
