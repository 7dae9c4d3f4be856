//! In-memory load store for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{Load, LoadStatus, LoadStatusEvent, LoadStore, StoreError};

#[derive(Default)]
struct State {
    loads: HashMap<String, Load>,
    events: Vec<LoadStatusEvent>,
}

/// Load store held in process memory.
///
/// A single mutex guards loads and events, so [`LoadStore::apply_transition`]
/// is atomic.
#[derive(Default)]
pub struct InMemoryLoadStore {
    state: Mutex<State>,
}

impl InMemoryLoadStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a load, replacing any load with the same id.
    pub fn insert_load(&self, load: Load) {
        self.state.lock().loads.insert(load.id.clone(), load);
    }

    /// Snapshot of a load regardless of owner.
    #[must_use]
    pub fn load(&self, load_id: &str) -> Option<Load> {
        self.state.lock().loads.get(load_id).cloned()
    }

    /// Number of recorded events across all loads.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.state.lock().events.len()
    }
}

impl State {
    fn owned(&self, organization_id: &str, load_id: &str) -> Option<&Load> {
        self.loads
            .get(load_id)
            .filter(|load| load.is_owned_by(organization_id))
    }
}

#[async_trait]
impl LoadStore for InMemoryLoadStore {
    async fn find_load_status(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Option<LoadStatus>, StoreError> {
        Ok(self
            .state
            .lock()
            .owned(organization_id, load_id)
            .map(|load| load.status))
    }

    async fn update_load_status(
        &self,
        load_id: &str,
        status: LoadStatus,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        let load = state
            .loads
            .get_mut(load_id)
            .ok_or_else(|| StoreError::NotFound(load_id.to_string()))?;
        load.status = status;
        Ok(())
    }

    async fn append_status_event(&self, event: LoadStatusEvent) -> Result<(), StoreError> {
        self.state.lock().events.push(event);
        Ok(())
    }

    async fn list_status_events(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Vec<LoadStatusEvent>, StoreError> {
        let state = self.state.lock();
        if state.owned(organization_id, load_id).is_none() {
            return Ok(Vec::new());
        }
        Ok(state
            .events
            .iter()
            .filter(|event| event.load_id == load_id)
            .cloned()
            .collect())
    }

    async fn apply_transition(
        &self,
        organization_id: &str,
        expected: Option<LoadStatus>,
        event: LoadStatusEvent,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        let load = state
            .loads
            .get_mut(&event.load_id)
            .filter(|load| load.is_owned_by(organization_id))
            .ok_or_else(|| StoreError::NotFound(event.load_id.clone()))?;
        if let Some(expected) = expected {
            if load.status != expected {
                return Err(StoreError::Conflict {
                    load_id: event.load_id,
                    expected,
                    actual: load.status,
                });
            }
        }
        load.status = event.status;
        state.events.push(event);
        Ok(())
    }
}
