//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::SessionId;

#[test]
fn test_invalid_identifier_from_parse() {
    let error = "not-a-session".parse::<SessionId>().unwrap_err();

    match error {
        CoreError::InvalidIdentifier { kind, value } => {
            assert_eq!(kind, "SessionId");
            assert_eq!(value, "not-a-session");
        }
        _ => panic!("Expected InvalidIdentifier error"),
    }
}

#[test]
fn test_invalid_identifier_display() {
    let error = CoreError::invalid_identifier("SessionId", "abc");

    assert_eq!(error.to_string(), "Invalid identifier for SessionId: abc");
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("max_sessions must be at least 1");

    match &error {
        CoreError::Configuration(msg) => assert_eq!(msg, "max_sessions must be at least 1"),
        _ => panic!("Expected Configuration error"),
    }
    assert!(error.to_string().starts_with("Configuration error"));
}
