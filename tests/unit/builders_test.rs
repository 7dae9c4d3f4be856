//! Tests for engine builders

use std::sync::Arc;

use fleet_load_status::builders::{build_engine, build_store};
use fleet_load_status::config::{EngineConfig, StoreBackendConfig};
use fleet_load_status::core::LoadStatus;
use fleet_load_status::infra::StaticSession;

#[tokio::test]
async fn test_build_in_memory_engine() {
    let engine = build_engine(&EngineConfig::default(), Arc::new(StaticSession::signed_in("u1")))
        .await
        .unwrap();
    assert!(!engine.guards_concurrent_updates());
}

#[tokio::test]
async fn test_build_file_store_and_engine() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig {
        store: StoreBackendConfig::File {
            path: dir.path().join("journal"),
        },
        guard_concurrent_updates: true,
    };

    let store = build_store(&config).await.unwrap();
    assert_eq!(store.find_load_status("org", "missing").await.unwrap(), None);
    assert!(dir.path().join("journal").join("loads.jsonl").exists());

    let engine = build_engine(&config, Arc::new(StaticSession::signed_in("u1")))
        .await
        .unwrap();
    assert!(engine.guards_concurrent_updates());
    assert!(engine
        .update_load_status("org", "missing", LoadStatus::Assigned)
        .await
        .is_err());
}

#[tokio::test]
async fn test_build_rejects_invalid_config() {
    let config = EngineConfig {
        store: StoreBackendConfig::File {
            path: std::path::PathBuf::new(),
        },
        guard_concurrent_updates: false,
    };
    let err = build_store(&config).await.err().unwrap();
    assert!(err.to_string().contains("config invalid"));
}
