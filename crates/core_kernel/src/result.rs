//! Mapping result
//!
//! Bundles a mapped value with its partner validation outcome.

use serde::Serialize;

/// Immutable result of a map-and-validate operation
///
/// `is_valid` is derived from the error list, so a result is valid iff it
/// carries no errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingResult<T> {
    value: T,
    is_valid: bool,
    errors: Vec<String>,
}

impl<T> MappingResult<T> {
    /// Creates a result from a mapped value and its validation errors
    pub fn new(value: T, errors: Vec<String>) -> Self {
        Self {
            value,
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Creates a valid result
    pub fn valid(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// The mapped object
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether the mapped object passed validation
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Validation errors, empty if valid
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the result into its value and error list
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.errors)
    }
}
