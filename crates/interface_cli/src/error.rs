//! CLI error handling

use core_kernel::MappingError;
use domain_reservation::ReservationError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Cannot render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Invalid sample date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
