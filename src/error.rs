//! Error types for the stop optimization pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Broad failure class, used when logging and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    FieldMissing,
}

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stop data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stop record {index} is missing required field '{field}'")]
    FieldMissing { index: usize, field: &'static str },
}

impl OptimizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OptimizeError::Io { .. } => ErrorKind::Io,
            OptimizeError::Parse { .. } => ErrorKind::Parse,
            OptimizeError::FieldMissing { .. } => ErrorKind::FieldMissing,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptimizeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
