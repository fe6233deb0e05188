//! Mapping error taxonomy
//!
//! Every failure of the registry or the handler surfaces as a [`MappingError`]
//! to the direct caller. A failed partner validation is *not* an error; it is
//! reported through [`MappingResult`](crate::result::MappingResult).

use thiserror::Error;

use crate::types::TypePair;

/// Errors raised by the mapper registry and the map handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A mapper is already registered for the type pair
    #[error("Mapper already registered for {source_type} → {target_type}")]
    DuplicateMapping {
        source_type: &'static str,
        target_type: &'static str,
    },

    /// No mapper is registered for the exact type pair
    #[error("No mapper found for {source_type} → {target_type}")]
    MappingNotFound {
        source_type: &'static str,
        target_type: &'static str,
    },

    /// A required input was not supplied
    #[error("Required input `{argument}` was not provided")]
    NullInput { argument: &'static str },

    /// A value crossing the type-erased boundary had an unexpected type
    #[error("Type mismatch: expected {expected} ({context})")]
    TypeMismatch {
        expected: &'static str,
        context: String,
    },
}

impl MappingError {
    /// Creates a DuplicateMapping error for the given pair
    pub fn duplicate(pair: &TypePair) -> Self {
        MappingError::DuplicateMapping {
            source_type: pair.source().name(),
            target_type: pair.target().name(),
        }
    }

    /// Creates a MappingNotFound error for the given pair
    pub fn not_found(pair: &TypePair) -> Self {
        MappingError::MappingNotFound {
            source_type: pair.source().name(),
            target_type: pair.target().name(),
        }
    }

    /// Creates a NullInput error naming the missing argument
    pub fn null_input(argument: &'static str) -> Self {
        MappingError::NullInput { argument }
    }

    /// Creates a TypeMismatch error
    pub fn type_mismatch(expected: &'static str, context: impl Into<String>) -> Self {
        MappingError::TypeMismatch {
            expected,
            context: context.into(),
        }
    }

    /// Returns true if this error was raised by a duplicate registration
    pub fn is_duplicate(&self) -> bool {
        matches!(self, MappingError::DuplicateMapping { .. })
    }

    /// Returns true if this error was raised by a failed lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, MappingError::MappingNotFound { .. })
    }
}
