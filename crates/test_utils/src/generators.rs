//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating reservations.

use chrono::{Duration, NaiveDateTime};
use domain_reservation::{dirs21, google};
use proptest::prelude::*;

use crate::fixtures::TemporalFixtures;

/// Strategy for generating timestamps within roughly ten years, at minute
/// resolution
pub fn datetime_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..3_650, 0i64..1_440).prop_map(|(days, minutes)| {
        TemporalFixtures::date(2020, 1, 1) + Duration::days(days) + Duration::minutes(minutes)
    })
}

/// Strategy for generating reservation ids
pub fn reservation_id_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}-[0-9]{1,6}"
}

/// Strategy for generating guest names
pub fn guest_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z]{2,12}"
}

/// Strategy for generating stay lengths in nights (0 to 30)
pub fn nights_strategy() -> impl Strategy<Value = i64> {
    0i64..=30
}

/// Strategy for generating Dirs21 reservations with check-out on or after
/// check-in
pub fn dirs21_reservation_strategy() -> impl Strategy<Value = dirs21::Reservation> {
    (
        reservation_id_strategy(),
        datetime_strategy(),
        nights_strategy(),
        guest_name_strategy(),
    )
        .prop_map(|(reservation_id, check_in, nights, guest_name)| dirs21::Reservation {
            reservation_id,
            check_in,
            check_out: check_in + Duration::days(nights),
            guest_name,
        })
}

/// Strategy for generating Google reservations, including blank fields and
/// reversed date ranges
pub fn google_reservation_strategy() -> impl Strategy<Value = google::Reservation> {
    (
        prop_oneof![Just(String::new()), reservation_id_strategy()],
        datetime_strategy(),
        -5i64..30,
        prop_oneof![Just(String::new()), guest_name_strategy()],
    )
        .prop_map(|(booking_id, arrival_date, nights, guest_full_name)| google::Reservation {
            booking_id,
            arrival_date,
            departure_date: arrival_date + Duration::days(nights),
            guest_full_name,
        })
}

/// Strategy for generating batches of up to `max` Dirs21 reservations
pub fn dirs21_batch_strategy(max: usize) -> impl Strategy<Value = Vec<dirs21::Reservation>> {
    prop::collection::vec(dirs21_reservation_strategy(), 0..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn dirs21_check_out_not_before_check_in(reservation in dirs21_reservation_strategy()) {
            prop_assert!(reservation.check_out >= reservation.check_in);
        }

        #[test]
        fn guest_names_have_two_parts(name in guest_name_strategy()) {
            prop_assert_eq!(name.split(' ').count(), 2);
        }

        #[test]
        fn batches_respect_max(batch in dirs21_batch_strategy(5)) {
            prop_assert!(batch.len() <= 5);
        }
    }
}
