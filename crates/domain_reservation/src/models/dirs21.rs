//! Dirs21 reservation schema

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A reservation as the Dirs21 platform stores it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub guest_name: String,
}

impl Reservation {
    /// Whole days between check-in and check-out, truncated toward zero
    pub fn stay_nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}
