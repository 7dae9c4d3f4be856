//! Tests for the request/response surface

use std::sync::Arc;

use fleet_load_status::core::{Load, LoadStatus, LoadStatusEngine};
use fleet_load_status::infra::{InMemoryLoadStore, StaticSession};
use fleet_load_status::runtime::{
    allowed_statuses, health, update_load_status_form, ActionResult, UpdateLoadStatusRequest,
};

fn engine_with(status: LoadStatus) -> (Arc<InMemoryLoadStore>, LoadStatusEngine) {
    let store = Arc::new(InMemoryLoadStore::new());
    store.insert_load(Load::new("L1", "org-1", status));
    let engine = LoadStatusEngine::new(store.clone(), Arc::new(StaticSession::signed_in("u1")));
    (store, engine)
}

#[test]
fn test_action_result_wire_format() {
    assert_eq!(
        serde_json::to_string(&ActionResult::ok()).unwrap(),
        r#"{"success":true}"#
    );
    assert_eq!(
        serde_json::to_string(&ActionResult::failure("Unauthorized")).unwrap(),
        r#"{"success":false,"error":"Unauthorized"}"#
    );
}

#[test]
fn test_request_wire_format() {
    let req: UpdateLoadStatusRequest = serde_json::from_str(
        r#"{"organizationId":"org-1","loadId":"L1","newStatus":"in_transit"}"#,
    )
    .unwrap();
    assert_eq!(req.new_status, LoadStatus::InTransit);
    assert!(serde_json::from_str::<UpdateLoadStatusRequest>(
        r#"{"organizationId":"org-1","loadId":"L1","newStatus":"teleported"}"#
    )
    .is_err());
}

#[tokio::test]
async fn test_form_action_parses_status() {
    let (store, engine) = engine_with(LoadStatus::Assigned);

    let result = update_load_status_form(&engine, "org-1", "L1", "in_transit").await;
    assert_eq!(result, ActionResult::ok());
    assert_eq!(store.load("L1").unwrap().status, LoadStatus::InTransit);
}

#[tokio::test]
async fn test_form_action_unknown_status() {
    let (store, engine) = engine_with(LoadStatus::Assigned);

    let result = update_load_status_form(&engine, "org-1", "L1", "teleported").await;
    assert_eq!(result, ActionResult::failure("Invalid status change"));
    assert_eq!(store.event_count(), 0);
}

#[tokio::test]
async fn test_allowed_statuses() {
    let (_store, engine) = engine_with(LoadStatus::Assigned);

    let response = allowed_statuses(&engine, "org-1", "L1").await.unwrap();
    assert_eq!(
        response.statuses,
        vec![LoadStatus::InTransit, LoadStatus::Cancelled, LoadStatus::Problem]
    );

    let err = allowed_statuses(&engine, "org-2", "L1").await.unwrap_err();
    assert_eq!(err, ActionResult::failure("Load not found"));
}

#[test]
fn test_health() {
    assert!(health().ok);
}
