//! Reservation Domain
//!
//! This crate holds everything partner-specific about reservations:
//!
//! - **Models**: the Dirs21 and Google reservation schemas
//! - **Mappers**: `ObjectMapper` implementations for both directions, plus the
//!   catalog that lists them for discovery
//! - **Rules**: Google's partner rules (normalization and validation)
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use core_kernel::{MapHandler, MapperRegistry};
//! use domain_reservation::{dirs21, google, mapper_catalog, GoogleReservationRules};
//!
//! let registry = Arc::new(MapperRegistry::new());
//! registry.register_from_source(&mapper_catalog()).unwrap();
//! let handler = MapHandler::new(registry);
//!
//! let check_in = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let reservation = dirs21::Reservation {
//!     reservation_id: "R-3001".to_string(),
//!     check_in,
//!     check_out: check_in + chrono::Duration::days(2),
//!     guest_name: "David Brown".to_string(),
//! };
//!
//! let result = handler
//!     .map_and_validate::<_, google::Reservation, _>(&reservation, &GoogleReservationRules)
//!     .unwrap();
//! assert!(result.is_valid());
//! assert_eq!(result.value().booking_id, "GOOGLE-R-3001");
//! assert_eq!(result.value().guest_full_name, "DAVID BROWN");
//! ```

pub mod models;
pub mod mappers;
pub mod rules;
pub mod batch;
pub mod error;

pub use models::{dirs21, google};
pub use mappers::{mapper_catalog, Dirs21ToGoogleReservationMapper, GoogleToDirs21ReservationMapper};
pub use rules::{GoogleReservationError, GoogleReservationRules};
pub use batch::{load_dirs21_batch, read_dirs21_batch};
pub use error::ReservationError;
