//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use fleet_load_status::core::{
    Load, LoadStatus, LoadStatusEngine, LoadStatusEvent, LoadStore, StoreError,
};
use fleet_load_status::infra::{InMemoryLoadStore, StaticSession};
use fleet_load_status::util::init_tracing;

pub const ORG: &str = "org-acme";
pub const OTHER_ORG: &str = "org-rival";
pub const LOAD: &str = "load-1";

/// In-memory store that counts every call and can be told to fail writes.
#[derive(Default)]
pub struct SpyStore {
    pub inner: InMemoryLoadStore,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub fail_writes: bool,
}

impl SpyStore {
    pub fn with_load(status: LoadStatus) -> Self {
        let store = Self::default();
        store.inner.insert_load(Load::new(LOAD, ORG, status));
        store
    }

    pub fn failing(status: LoadStatus) -> Self {
        let mut store = Self::with_load(status);
        store.fail_writes = true;
        store
    }

    pub fn calls(&self) -> usize {
        self.reads.load(Ordering::SeqCst) + self.writes.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> LoadStatus {
        self.inner.load(LOAD).expect("seeded load").status
    }

    fn write(&self) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StoreError::Backend("disk full".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl LoadStore for SpyStore {
    async fn find_load_status(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Option<LoadStatus>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_load_status(organization_id, load_id).await
    }

    async fn update_load_status(&self, load_id: &str, status: LoadStatus) -> Result<(), StoreError> {
        self.write()?;
        self.inner.update_load_status(load_id, status).await
    }

    async fn append_status_event(&self, event: LoadStatusEvent) -> Result<(), StoreError> {
        self.write()?;
        self.inner.append_status_event(event).await
    }

    async fn list_status_events(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Vec<LoadStatusEvent>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_status_events(organization_id, load_id).await
    }

    async fn apply_transition(
        &self,
        organization_id: &str,
        expected: Option<LoadStatus>,
        event: LoadStatusEvent,
    ) -> Result<(), StoreError> {
        self.write()?;
        self.inner.apply_transition(organization_id, expected, event).await
    }
}

pub fn signed_in() -> Arc<StaticSession> {
    Arc::new(StaticSession::signed_in("user-1"))
}

pub fn engine_over(store: Arc<SpyStore>) -> LoadStatusEngine {
    init_tracing();
    LoadStatusEngine::new(store, signed_in())
}
