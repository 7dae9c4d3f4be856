//! Configuration models for the engine and its storage backend.

pub mod engine;

pub use engine::{EngineConfig, StoreBackendConfig};
