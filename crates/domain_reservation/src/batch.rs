//! Reservation batches
//!
//! Loads Dirs21 reservations from a JSON array, the format the Dirs21 export
//! produces.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ReservationError;
use crate::models::dirs21;

/// Parses a JSON array of Dirs21 reservations
pub fn load_dirs21_batch(json: &str) -> Result<Vec<dirs21::Reservation>, ReservationError> {
    let reservations: Vec<dirs21::Reservation> = serde_json::from_str(json)?;
    debug!(count = reservations.len(), "Loaded Dirs21 reservation batch");
    Ok(reservations)
}

/// Reads and parses a JSON file of Dirs21 reservations
pub fn read_dirs21_batch(path: &Path) -> Result<Vec<dirs21::Reservation>, ReservationError> {
    let json = fs::read_to_string(path).map_err(|e| ReservationError::io(path, e))?;
    load_dirs21_batch(&json)
}
