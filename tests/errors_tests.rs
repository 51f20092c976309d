use std::error::Error;

use sqs_shovel::DrainError;

#[test]
fn drain_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = DrainError::Config("missing sink".to_string());
    assert_error(&error);
}

#[test]
fn drain_error_display() {
    let error = DrainError::Config("source queue must not be empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: source queue must not be empty"
    );

    let error = DrainError::RemoteService("receive failed".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: receive failed"
    );

    let error = DrainError::Serialization("bad batch".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to serialize message batch: bad batch"
    );
}

#[test]
fn serde_errors_become_serialization_errors() {
    let err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
    let drain_err: DrainError = err.into();

    match drain_err {
        DrainError::Serialization(msg) => assert!(!msg.is_empty()),
        other => panic!("Unexpected error type: {other:?}"),
    }
}
