//! Test Data Builders
//!
//! Builder patterns for constructing reservations with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{Duration, NaiveDateTime};
use domain_reservation::{dirs21, google};

use crate::fixtures::TemporalFixtures;

/// Builder for Dirs21 reservations
pub struct Dirs21ReservationBuilder {
    reservation_id: String,
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    guest_name: String,
}

impl Default for Dirs21ReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Dirs21ReservationBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            reservation_id: "R-100".to_string(),
            check_in: TemporalFixtures::check_in(),
            check_out: TemporalFixtures::check_out(),
            guest_name: "Test User".to_string(),
        }
    }

    pub fn with_reservation_id(mut self, id: impl Into<String>) -> Self {
        self.reservation_id = id.into();
        self
    }

    pub fn with_check_in(mut self, check_in: NaiveDateTime) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn with_check_out(mut self, check_out: NaiveDateTime) -> Self {
        self.check_out = check_out;
        self
    }

    /// Sets check-out to `nights` days after the current check-in
    pub fn with_nights(mut self, nights: i64) -> Self {
        self.check_out = self.check_in + Duration::days(nights);
        self
    }

    pub fn with_guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = name.into();
        self
    }

    /// Builds the reservation
    pub fn build(self) -> dirs21::Reservation {
        dirs21::Reservation {
            reservation_id: self.reservation_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guest_name: self.guest_name,
        }
    }
}

/// Builder for Google reservations
pub struct GoogleReservationBuilder {
    booking_id: String,
    arrival_date: NaiveDateTime,
    departure_date: NaiveDateTime,
    guest_full_name: String,
}

impl Default for GoogleReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleReservationBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            booking_id: "G-123".to_string(),
            arrival_date: TemporalFixtures::check_in(),
            departure_date: TemporalFixtures::check_in() + Duration::days(2),
            guest_full_name: "Test User".to_string(),
        }
    }

    pub fn with_booking_id(mut self, id: impl Into<String>) -> Self {
        self.booking_id = id.into();
        self
    }

    pub fn with_arrival_date(mut self, date: NaiveDateTime) -> Self {
        self.arrival_date = date;
        self
    }

    pub fn with_departure_date(mut self, date: NaiveDateTime) -> Self {
        self.departure_date = date;
        self
    }

    /// Sets departure to `nights` days after the current arrival
    pub fn with_nights(mut self, nights: i64) -> Self {
        self.departure_date = self.arrival_date + Duration::days(nights);
        self
    }

    pub fn with_guest_full_name(mut self, name: impl Into<String>) -> Self {
        self.guest_full_name = name.into();
        self
    }

    /// Builds the reservation
    pub fn build(self) -> google::Reservation {
        google::Reservation {
            booking_id: self.booking_id,
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
            guest_full_name: self.guest_full_name,
        }
    }
}
