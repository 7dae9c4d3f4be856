//! Tests for error types

use fleet_load_status::core::{LoadStatus, LoadStatusError, StoreError};

#[test]
fn test_user_messages() {
    assert_eq!(LoadStatusError::Unauthorized.user_message(), "Unauthorized");
    assert_eq!(LoadStatusError::NotFound.user_message(), "Load not found");
    assert_eq!(
        LoadStatusError::InvalidTransition {
            from: LoadStatus::Assigned,
            to: LoadStatus::Delivered,
        }
        .user_message(),
        "Invalid status change"
    );
    assert_eq!(
        LoadStatusError::Persistence("io".into()).user_message(),
        "Failed to update load status"
    );
    assert_eq!(
        LoadStatusError::Conflict.user_message(),
        "Load status changed concurrently"
    );
}

#[test]
fn test_invalid_transition_display() {
    let err = LoadStatusError::InvalidTransition {
        from: LoadStatus::Assigned,
        to: LoadStatus::Delivered,
    };
    assert_eq!(format!("{}", err), "invalid status change: assigned -> delivered");
}

#[test]
fn test_store_error_mapping() {
    assert_eq!(
        LoadStatusError::from(StoreError::NotFound("L1".into())),
        LoadStatusError::NotFound
    );
    assert_eq!(
        LoadStatusError::from(StoreError::Backend("connection failed".into())),
        LoadStatusError::Persistence("connection failed".into())
    );
    assert_eq!(
        LoadStatusError::from(StoreError::Conflict {
            load_id: "L1".into(),
            expected: LoadStatus::Assigned,
            actual: LoadStatus::Cancelled,
        }),
        LoadStatusError::Conflict
    );
}

#[test]
fn test_backend_error_display() {
    let err = StoreError::Backend("connection failed".to_string());
    assert_eq!(format!("{}", err), "backend error: connection failed");
}
