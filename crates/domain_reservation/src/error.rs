//! Reservation domain errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading reservation data
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The batch is not a JSON array of reservations
    #[error("Invalid reservation batch: {0}")]
    InvalidBatch(#[from] serde_json::Error),

    /// The batch file could not be read
    #[error("Cannot read reservation batch {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReservationError {
    /// Creates an Io error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReservationError::Io {
            path: path.into(),
            source,
        }
    }
}
