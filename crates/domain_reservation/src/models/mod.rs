//! Partner reservation schemas
//!
//! Plain data records with no behaviour beyond small read-only helpers. Both
//! schemas serialize with camelCase field names, matching the partner APIs.

pub mod dirs21;
pub mod google;
