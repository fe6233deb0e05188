//! Pre-built Test Fixtures
//!
//! Provides ready-to-use reservations and dates for tests across the mapping
//! system. These fixtures are consistent and predictable.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use core_kernel::{MapHandler, MapperRegistry};
use domain_reservation::{dirs21, google, mapper_catalog};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Midnight on the given day
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Standard check-in (Mar 1, 2026)
    pub fn check_in() -> NaiveDateTime {
        Self::date(2026, 3, 1)
    }

    /// Standard check-out, four nights after check-in
    pub fn check_out() -> NaiveDateTime {
        Self::check_in() + Duration::days(4)
    }

    /// Afternoon arrival for partial-day stays
    pub fn afternoon_arrival() -> NaiveDateTime {
        Self::date(2026, 3, 1) + Duration::hours(15)
    }

    /// Morning departure the next day, less than 24 hours after
    /// [`TemporalFixtures::afternoon_arrival`]
    pub fn next_morning() -> NaiveDateTime {
        Self::date(2026, 3, 2) + Duration::hours(10)
    }
}

/// Fixture for reservation test data
pub struct ReservationFixtures;

impl ReservationFixtures {
    /// The canonical round-trip reservation
    pub fn dirs21() -> dirs21::Reservation {
        dirs21::Reservation {
            reservation_id: "R999".to_string(),
            check_in: TemporalFixtures::check_in(),
            check_out: TemporalFixtures::check_out(),
            guest_name: "Test User".to_string(),
        }
    }

    /// A Google reservation that passes every Google rule
    pub fn google_valid() -> google::Reservation {
        google::Reservation {
            booking_id: "GOOGLE-123".to_string(),
            arrival_date: TemporalFixtures::check_in(),
            departure_date: TemporalFixtures::check_in() + Duration::days(2),
            guest_full_name: "VALID USER".to_string(),
        }
    }

    /// Blank id, blank name, departure on the arrival date
    pub fn google_all_invalid() -> google::Reservation {
        google::Reservation {
            booking_id: String::new(),
            arrival_date: TemporalFixtures::check_in(),
            departure_date: TemporalFixtures::check_in(),
            guest_full_name: String::new(),
        }
    }

    /// Departure later than arrival but within the same 24 hours
    pub fn google_short_stay() -> google::Reservation {
        google::Reservation {
            booking_id: "GOOGLE-SHORT".to_string(),
            arrival_date: TemporalFixtures::afternoon_arrival(),
            departure_date: TemporalFixtures::next_morning(),
            guest_full_name: "SHORT STAY".to_string(),
        }
    }

    /// Three consecutive Dirs21 reservations
    pub fn dirs21_batch() -> Vec<dirs21::Reservation> {
        ["Alice Johnson", "Bob Williams", "Carol Martinez"]
            .iter()
            .enumerate()
            .map(|(i, guest)| {
                let check_in = TemporalFixtures::date(2026, 4, 1) + Duration::days(i as i64 * 4);
                dirs21::Reservation {
                    reservation_id: format!("R-200{}", i + 1),
                    check_in,
                    check_out: check_in + Duration::days(2),
                    guest_name: guest.to_string(),
                }
            })
            .collect()
    }
}

/// Fixture for mapping infrastructure
pub struct HandlerFixtures;

impl HandlerFixtures {
    /// A handler with every reservation mapper discovered
    pub fn discovered() -> MapHandler {
        let registry = MapperRegistry::new();
        registry.register_from_source(&mapper_catalog()).unwrap();
        MapHandler::new(Arc::new(registry))
    }

    /// A handler over an empty registry
    pub fn empty() -> MapHandler {
        MapHandler::new(Arc::new(MapperRegistry::new()))
    }
}
