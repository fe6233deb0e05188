//! Custom Test Assertions
//!
//! Assertion helpers for reservation types that give more meaningful error
//! messages than comparing whole structs.

use core_kernel::{MappingError, MappingResult};
use domain_reservation::{dirs21, google};

/// Asserts that a Google reservation carries the same data as a Dirs21 one
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_same_reservation(source: &dirs21::Reservation, target: &google::Reservation) {
    assert_eq!(
        source.reservation_id, target.booking_id,
        "Id mismatch: reservation_id={}, booking_id={}",
        source.reservation_id, target.booking_id
    );
    assert_eq!(
        source.check_in, target.arrival_date,
        "Check-in mismatch: check_in={}, arrival_date={}",
        source.check_in, target.arrival_date
    );
    assert_eq!(
        source.check_out, target.departure_date,
        "Check-out mismatch: check_out={}, departure_date={}",
        source.check_out, target.departure_date
    );
    assert_eq!(
        source.guest_name, target.guest_full_name,
        "Guest mismatch: guest_name={:?}, guest_full_name={:?}",
        source.guest_name, target.guest_full_name
    );
}

/// Asserts that a result is valid and has no errors
pub fn assert_valid<T>(result: &MappingResult<T>) {
    assert!(
        result.is_valid(),
        "Expected valid result, got errors: {:?}",
        result.errors()
    );
    assert!(result.errors().is_empty());
}

/// Asserts that a result is invalid and reports exactly `expected`, in order
pub fn assert_invalid_with<T>(result: &MappingResult<T>, expected: &[&str]) {
    assert!(!result.is_valid(), "Expected invalid result");
    assert_eq!(
        result.errors(),
        expected,
        "Validation errors differ: actual={:?}, expected={:?}",
        result.errors(),
        expected
    );
}

/// Asserts that an error reports a missing mapper
pub fn assert_not_found(err: &MappingError) {
    assert!(
        err.is_not_found(),
        "Expected MappingNotFound, got {err:?}"
    );
}

/// Asserts that an error reports a duplicate registration
pub fn assert_duplicate(err: &MappingError) {
    assert!(
        err.is_duplicate(),
        "Expected DuplicateMapping, got {err:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ReservationFixtures;
    use core_kernel::TypePair;

    #[test]
    fn test_assert_same_reservation_passes() {
        let source = ReservationFixtures::dirs21();
        let target = google::Reservation {
            booking_id: source.reservation_id.clone(),
            arrival_date: source.check_in,
            departure_date: source.check_out,
            guest_full_name: source.guest_name.clone(),
        };
        assert_same_reservation(&source, &target);
    }

    #[test]
    #[should_panic(expected = "Guest mismatch")]
    fn test_assert_same_reservation_names_field() {
        let source = ReservationFixtures::dirs21();
        let target = google::Reservation {
            booking_id: source.reservation_id.clone(),
            arrival_date: source.check_in,
            departure_date: source.check_out,
            guest_full_name: "Someone Else".to_string(),
        };
        assert_same_reservation(&source, &target);
    }

    #[test]
    fn test_result_assertions() {
        assert_valid(&MappingResult::valid(1));
        assert_invalid_with(&MappingResult::new(1, vec!["bad".to_string()]), &["bad"]);
    }

    #[test]
    fn test_error_assertions() {
        let pair = TypePair::of::<dirs21::Reservation, google::Reservation>();
        assert_not_found(&MappingError::not_found(&pair));
        assert_duplicate(&MappingError::duplicate(&pair));
    }
}
