//! Google reservation rules
//!
//! # Normalization
//!
//! - Guest names are uppercased
//! - Booking ids carry the `GOOGLE-` prefix, added once. A blank id becomes
//!   the bare prefix
//!
//! # Validation Rules
//!
//! - Booking id must not be blank
//! - Guest full name must not be blank
//! - Departure must be strictly after arrival
//! - The stay must last at least one whole day (checked only when the dates
//!   are in order, so a reversed range is reported once)

use core_kernel::PartnerRules;
use serde::Serialize;
use thiserror::Error;

use crate::models::google::Reservation;

/// Partner key for Google
pub const GOOGLE_PARTNER: &str = "google";

/// Prefix Google requires on every booking id
pub const BOOKING_ID_PREFIX: &str = "GOOGLE-";

/// Minimum number of whole days Google accepts for a stay
pub const MINIMUM_STAY_NIGHTS: i64 = 1;

/// Google validation failures
///
/// `Display` renders the message reported in a
/// [`MappingResult`](core_kernel::MappingResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum GoogleReservationError {
    #[error("BookingId is required for Google")]
    BookingIdRequired,

    #[error("GuestFullName is required for Google")]
    GuestFullNameRequired,

    #[error("DepartureDate must be after ArrivalDate")]
    DepartureBeforeArrival,

    #[error("Google requires minimum 1 night stay")]
    MinimumStayNotMet,
}

/// Google-specific business rules for reservations
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleReservationRules;

impl GoogleReservationRules {
    pub fn new() -> Self {
        Self
    }

    /// Returns every rule the reservation violates, in rule order
    pub fn violations(&self, target: &Reservation) -> Vec<GoogleReservationError> {
        let mut violations = Vec::new();

        if target.booking_id.trim().is_empty() {
            violations.push(GoogleReservationError::BookingIdRequired);
        }

        if target.guest_full_name.trim().is_empty() {
            violations.push(GoogleReservationError::GuestFullNameRequired);
        }

        if target.departure_date <= target.arrival_date {
            violations.push(GoogleReservationError::DepartureBeforeArrival);
        } else if target.stay_nights() < MINIMUM_STAY_NIGHTS {
            violations.push(GoogleReservationError::MinimumStayNotMet);
        }

        violations
    }
}

impl PartnerRules<Reservation> for GoogleReservationRules {
    fn partner(&self) -> &str {
        GOOGLE_PARTNER
    }

    fn apply(&self, target: &mut Reservation) {
        target.guest_full_name = target.guest_full_name.to_uppercase();

        if !target.booking_id.starts_with(BOOKING_ID_PREFIX) {
            target.booking_id = format!("{BOOKING_ID_PREFIX}{}", target.booking_id);
        }
    }

    fn validate(&self, target: &Reservation) -> Vec<String> {
        self.violations(target)
            .into_iter()
            .map(|violation| violation.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn reservation(booking_id: &str, name: &str, arrival: NaiveDateTime, departure: NaiveDateTime) -> Reservation {
        Reservation {
            booking_id: booking_id.to_string(),
            arrival_date: arrival,
            departure_date: departure,
            guest_full_name: name.to_string(),
        }
    }

    #[test]
    fn test_apply_prefixes_once() {
        let rules = GoogleReservationRules::new();
        let mut target = reservation("123", "Test User", at(1, 0), at(3, 0));

        rules.apply(&mut target);
        assert_eq!(target.booking_id, "GOOGLE-123");
        rules.apply(&mut target);
        assert_eq!(target.booking_id, "GOOGLE-123");
    }

    #[test]
    fn test_apply_prefixes_blank_id() {
        let mut target = reservation("", "x", at(1, 0), at(3, 0));
        GoogleReservationRules.apply(&mut target);
        assert_eq!(target.booking_id, "GOOGLE-");
        assert!(GoogleReservationRules.violations(&target).is_empty());
    }

    #[test]
    fn test_apply_checks_prefix_on_raw_id() {
        let mut target = reservation(" GOOGLE-1", "Guest", at(1, 0), at(3, 0));
        GoogleReservationRules.apply(&mut target);
        assert_eq!(target.booking_id, "GOOGLE- GOOGLE-1");

        GoogleReservationRules.apply(&mut target);
        assert_eq!(target.booking_id, "GOOGLE- GOOGLE-1");
    }

    #[test]
    fn test_apply_uppercases_guest_name() {
        let mut target = reservation("G-1", "john doe", at(1, 0), at(3, 0));
        GoogleReservationRules.apply(&mut target);
        assert_eq!(target.guest_full_name, "JOHN DOE");
    }

    #[test]
    fn test_short_stay_reports_minimum_only() {
        let target = reservation("G-1", "Guest", at(1, 15), at(2, 10));
        assert_eq!(
            GoogleReservationRules.violations(&target),
            vec![GoogleReservationError::MinimumStayNotMet]
        );
    }

    #[test]
    fn test_reversed_dates_report_range_only() {
        let target = reservation("G-1", "Guest", at(10, 0), at(8, 0));
        assert_eq!(
            GoogleReservationRules.violations(&target),
            vec![GoogleReservationError::DepartureBeforeArrival]
        );
    }

    #[test]
    fn test_whitespace_fields_are_blank() {
        let target = reservation("   ", "\t", at(1, 0), at(2, 0));
        assert_eq!(
            GoogleReservationRules.violations(&target),
            vec![
                GoogleReservationError::BookingIdRequired,
                GoogleReservationError::GuestFullNameRequired,
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GoogleReservationError::BookingIdRequired.to_string(),
            "BookingId is required for Google"
        );
        assert_eq!(
            GoogleReservationError::MinimumStayNotMet.to_string(),
            "Google requires minimum 1 night stay"
        );
    }

    #[test]
    fn test_partner_key() {
        assert_eq!(GoogleReservationRules.partner(), "google");
    }
}
