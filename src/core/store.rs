//! Collaborator traits consumed by the engine: persistence and session lookup.

use async_trait::async_trait;

use super::audit::LoadStatusEvent;
use super::error::StoreError;
use super::status::LoadStatus;

/// Persistence for load statuses and their audit trail.
///
/// Every read is scoped by organization: a load owned by another tenant is
/// indistinguishable from a missing one.
#[async_trait]
pub trait LoadStore: Send + Sync {
    /// Current status of a load, or `None` when absent for this organization.
    async fn find_load_status(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Option<LoadStatus>, StoreError>;

    /// Overwrite the status of a load.
    async fn update_load_status(&self, load_id: &str, status: LoadStatus)
        -> Result<(), StoreError>;

    /// Append one event to the audit trail.
    async fn append_status_event(&self, event: LoadStatusEvent) -> Result<(), StoreError>;

    /// Audit trail of one load in insertion order.
    async fn list_status_events(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Vec<LoadStatusEvent>, StoreError>;

    /// Update the status and append its event as one unit.
    ///
    /// When `expected` is set, the write only happens if the persisted status
    /// still equals it; otherwise [`StoreError::Conflict`] is returned.
    ///
    /// The default composes the primitive calls and is NOT atomic: a failure
    /// between the update and the append leaves a status change without its
    /// event, and the `expected` check races with other writers. Backends
    /// override this with a single-unit write.
    async fn apply_transition(
        &self,
        organization_id: &str,
        expected: Option<LoadStatus>,
        event: LoadStatusEvent,
    ) -> Result<(), StoreError> {
        if let Some(expected) = expected {
            let actual = self
                .find_load_status(organization_id, &event.load_id)
                .await?
                .ok_or_else(|| StoreError::NotFound(event.load_id.clone()))?;
            if actual != expected {
                return Err(StoreError::Conflict {
                    load_id: event.load_id,
                    expected,
                    actual,
                });
            }
        }
        self.update_load_status(&event.load_id, event.status).await?;
        self.append_status_event(event).await
    }
}

/// Authentication collaborator.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Id of the signed-in user, or `None` without a session.
    async fn current_user_id(&self) -> Option<String>;
}
