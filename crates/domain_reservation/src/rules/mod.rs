//! Partner rules
//!
//! One module per partner. Each provides an implementation of
//! [`PartnerRules`](core_kernel::PartnerRules) for that partner's schema.

pub mod google;

pub use google::{GoogleReservationError, GoogleReservationRules};
