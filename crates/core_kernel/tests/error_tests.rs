//! Tests for core_kernel error types

use core_kernel::{MappingError, TypePair};

struct Invoice;
struct Receipt;

#[test]
fn test_duplicate_error_names_both_types() {
    let error = MappingError::duplicate(&TypePair::of::<Invoice, Receipt>());

    match &error {
        MappingError::DuplicateMapping { source_type, target_type } => {
            assert!(source_type.ends_with("Invoice"));
            assert!(target_type.ends_with("Receipt"));
        }
        _ => panic!("Expected DuplicateMapping error"),
    }
    assert!(error.is_duplicate());
    assert!(!error.is_not_found());
}

#[test]
fn test_not_found_error_names_both_types() {
    let error = MappingError::not_found(&TypePair::of::<Invoice, Receipt>());
    let display = error.to_string();

    assert!(error.is_not_found());
    assert!(display.starts_with("No mapper found for"));
    assert!(display.contains("Invoice"));
    assert!(display.contains("Receipt"));
}

#[test]
fn test_duplicate_error_display() {
    let error = MappingError::duplicate(&TypePair::of::<Invoice, Receipt>());
    assert!(error.to_string().contains("already registered"));
}

#[test]
fn test_null_input_error() {
    let error = MappingError::null_input("sources");

    match error {
        MappingError::NullInput { argument } => assert_eq!(argument, "sources"),
        _ => panic!("Expected NullInput error"),
    }
}

#[test]
fn test_null_input_display() {
    let display = format!("{}", MappingError::null_input("rules"));
    assert_eq!(display, "Required input `rules` was not provided");
}

#[test]
fn test_type_mismatch_error() {
    let error = MappingError::type_mismatch("alloc::string::String", "output of mapper");

    assert!(matches!(error, MappingError::TypeMismatch { .. }));
    assert!(error.to_string().contains("alloc::string::String"));
    assert!(error.to_string().contains("output of mapper"));
}
