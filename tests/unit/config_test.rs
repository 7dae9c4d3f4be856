//! Tests for configuration validation

use std::collections::HashMap;
use std::path::PathBuf;

use fleet_load_status::config::{EngineConfig, StoreBackendConfig};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.store, StoreBackendConfig::InMemory);
    assert!(!config.guard_concurrent_updates);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_file_path_is_invalid() {
    let config = EngineConfig {
        store: StoreBackendConfig::File {
            path: PathBuf::new(),
        },
        guard_concurrent_updates: false,
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "store": { "kind": "file", "path": "/var/lib/fleet" },
        "guard_concurrent_updates": true
    }"#;

    let config = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(
        config.store,
        StoreBackendConfig::File {
            path: PathBuf::from("/var/lib/fleet")
        }
    );
    assert!(config.guard_concurrent_updates);
}

#[test]
fn test_config_from_json_defaults_guard() {
    let config = EngineConfig::from_json_str(r#"{ "store": { "kind": "in_memory" } }"#).unwrap();
    assert!(!config.guard_concurrent_updates);
}

#[test]
fn test_config_from_json_rejects_unknown_backend() {
    let err = EngineConfig::from_json_str(r#"{ "store": { "kind": "redis" } }"#).unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_config_from_lookup() {
    let config = EngineConfig::from_lookup(lookup(&[
        ("FLEET_STORE_BACKEND", "file"),
        ("FLEET_STORE_PATH", "/tmp/loads"),
        ("FLEET_GUARD_CONCURRENT_UPDATES", "true"),
    ]))
    .unwrap();
    assert_eq!(
        config.store,
        StoreBackendConfig::File {
            path: PathBuf::from("/tmp/loads")
        }
    );
    assert!(config.guard_concurrent_updates);
}

#[test]
fn test_config_from_empty_lookup() {
    let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_config_from_lookup_errors() {
    assert!(EngineConfig::from_lookup(lookup(&[("FLEET_STORE_BACKEND", "file")])).is_err());
    assert!(EngineConfig::from_lookup(lookup(&[("FLEET_STORE_BACKEND", "s3")])).is_err());
    assert!(
        EngineConfig::from_lookup(lookup(&[("FLEET_GUARD_CONCURRENT_UPDATES", "yes")])).is_err()
    );
}
