//! # Fleet Load Status
//!
//! Tenant-scoped load status state machine for fleet dispatch.
//!
//! A load (shipment) moves through a closed set of statuses. This crate owns
//! the static transition table and the single guarded mutation that applies
//! a transition: it checks the session, scopes the load to the caller's
//! organization, validates the edge, and persists the new status together
//! with an append-only audit event.
//!
//! ## Key Features
//!
//! - **Static Transition Table**: total, deterministic, terminal states have no exits
//! - **Tenant Isolation**: foreign loads are indistinguishable from missing ones
//! - **Atomic Audit Trail**: status write and event append are one unit
//! - **Pluggable Collaborators**: persistence and sessions are injected traits
//! - **Uniform Results**: every failure folds into `{ success, error }`
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fleet_load_status::core::{Load, LoadStatus, LoadStatusEngine};
//! use fleet_load_status::infra::{InMemoryLoadStore, StaticSession};
//!
//! let store = Arc::new(InMemoryLoadStore::new());
//! store.insert_load(Load::new("load-1", "org-1", LoadStatus::Assigned));
//! let engine = LoadStatusEngine::new(store, Arc::new(StaticSession::signed_in("user-1")));
//!
//! engine.update_load_status("org-1", "load-1", LoadStatus::InTransit).await?;
//! ```
//!
//! For complete examples, see:
//! - `tests/load_status_engine_test.rs` - engine scenarios
//! - `tests/transition_table_test.rs` - exhaustive edge checks

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core domain: statuses, transition rules, the engine and its collaborators.
pub mod core;
/// Configuration models for the engine and storage backends.
pub mod config;
/// Builders to construct engine components from configuration.
pub mod builders;
/// Infrastructure adapters for load storage and sessions.
pub mod infra;
/// Request/response surface for form actions and API routes.
pub mod runtime;
/// Shared utilities.
pub mod util;
