//! Append-only status audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::LoadStatus;
use crate::util::{clock::now, ids::new_id};

/// Immutable record of one accepted status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStatusEvent {
    /// Event identifier.
    pub id: String,
    /// Load the transition applied to.
    pub load_id: String,
    /// Status the load moved into.
    pub status: LoadStatus,
    /// When the transition was accepted.
    pub created_at: DateTime<Utc>,
}

/// Build a status event stamped with a fresh id and the current time.
pub fn build_status_event(load_id: impl Into<String>, status: LoadStatus) -> LoadStatusEvent {
    LoadStatusEvent {
        id: new_id(),
        load_id: load_id.into(),
        status,
        created_at: now(),
    }
}
