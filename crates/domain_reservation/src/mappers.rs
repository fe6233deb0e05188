//! Reservation mappers
//!
//! Field-by-field translations between the Dirs21 and Google schemas. The two
//! directions are exact inverses, so a round trip reproduces every field.
//!
//! | Dirs21           | Google            |
//! |------------------|-------------------|
//! | `reservation_id` | `booking_id`      |
//! | `check_in`       | `arrival_date`    |
//! | `check_out`      | `departure_date`  |
//! | `guest_name`     | `guest_full_name` |

use core_kernel::{MapperCatalog, ObjectMapper};

use crate::models::{dirs21, google};

/// Maps a Dirs21 reservation to the Google schema
#[derive(Debug, Clone, Copy, Default)]
pub struct Dirs21ToGoogleReservationMapper;

impl ObjectMapper for Dirs21ToGoogleReservationMapper {
    type Source = dirs21::Reservation;
    type Target = google::Reservation;

    fn map(&self, source: &dirs21::Reservation) -> google::Reservation {
        google::Reservation {
            booking_id: source.reservation_id.clone(),
            arrival_date: source.check_in,
            departure_date: source.check_out,
            guest_full_name: source.guest_name.clone(),
        }
    }
}

/// Maps a Google reservation back to the Dirs21 schema
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleToDirs21ReservationMapper;

impl ObjectMapper for GoogleToDirs21ReservationMapper {
    type Source = google::Reservation;
    type Target = dirs21::Reservation;

    fn map(&self, source: &google::Reservation) -> dirs21::Reservation {
        dirs21::Reservation {
            reservation_id: source.booking_id.clone(),
            check_in: source.arrival_date,
            check_out: source.departure_date,
            guest_name: source.guest_full_name.clone(),
        }
    }
}

/// Every mapper this crate provides, for
/// [`MapperRegistry::register_from_source`](core_kernel::MapperRegistry::register_from_source)
pub fn mapper_catalog() -> MapperCatalog {
    MapperCatalog::new(env!("CARGO_PKG_NAME"))
        .with::<Dirs21ToGoogleReservationMapper>()
        .with::<GoogleToDirs21ReservationMapper>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_dirs21_to_google_copies_fields() {
        let check_in = NaiveDate::from_ymd_opt(2026, 1, 10)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let source = dirs21::Reservation {
            reservation_id: "R123".to_string(),
            check_in,
            check_out: check_in + chrono::Duration::days(2),
            guest_name: "Adnan".to_string(),
        };

        let target = Dirs21ToGoogleReservationMapper.map(&source);
        assert_eq!(target.booking_id, "R123");
        assert_eq!(target.arrival_date, source.check_in);
        assert_eq!(target.departure_date, source.check_out);
        assert_eq!(target.guest_full_name, "Adnan");
    }

    #[test]
    fn test_google_to_dirs21_copies_fields() {
        let source = google::Reservation {
            booking_id: "G-456".to_string(),
            guest_full_name: "Jane Smith".to_string(),
            ..Default::default()
        };

        let target = GoogleToDirs21ReservationMapper.map(&source);
        assert_eq!(target.reservation_id, "G-456");
        assert_eq!(target.guest_name, "Jane Smith");
        assert_eq!(target.check_in, source.arrival_date);
    }

    #[test]
    fn test_catalog_lists_both_directions() {
        let catalog = mapper_catalog();
        assert_eq!(catalog.name(), "domain_reservation");
        assert_eq!(catalog.len(), 2);
        assert!(catalog
            .type_pairs()
            .any(|pair| pair.is::<dirs21::Reservation, google::Reservation>()));
        assert!(catalog
            .type_pairs()
            .any(|pair| pair.is::<google::Reservation, dirs21::Reservation>()));
    }
}
