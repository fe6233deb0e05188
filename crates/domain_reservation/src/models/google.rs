//! Google reservation schema

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A reservation in the shape Google's booking feed expects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub booking_id: String,
    pub arrival_date: NaiveDateTime,
    pub departure_date: NaiveDateTime,
    pub guest_full_name: String,
}

impl Reservation {
    /// Whole days between arrival and departure, truncated toward zero
    pub fn stay_nights(&self) -> i64 {
        (self.departure_date - self.arrival_date).num_days()
    }
}
