//! Load status engine: the only path that changes a load's status.
//!
//! Every call runs the same pipeline:
//!
//! 1. resolve the session (no session → [`LoadStatusError::Unauthorized`],
//!    the store is never touched);
//! 2. read the current status scoped to the organization (missing or foreign
//!    → [`LoadStatusError::NotFound`]);
//! 3. check the requested status against [`LoadStatus::allowed_next`];
//! 4. persist the new status and its audit event as one unit.
//!
//! Concurrent requests on one load are last-write-wins unless
//! [`LoadStatusEngine::with_concurrency_guard`] is enabled, in which case the
//! store rejects writes whose validated status has gone stale.

use std::sync::Arc;

use super::audit::{build_status_event, LoadStatusEvent};
use super::error::LoadStatusError;
use super::status::LoadStatus;
use super::store::{LoadStore, SessionProvider};

/// Validates and applies load status transitions.
#[derive(Clone)]
pub struct LoadStatusEngine {
    store: Arc<dyn LoadStore>,
    session: Arc<dyn SessionProvider>,
    guard_concurrent_updates: bool,
}

impl LoadStatusEngine {
    /// Create an engine over explicit collaborators.
    pub fn new(store: Arc<dyn LoadStore>, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            store,
            session,
            guard_concurrent_updates: false,
        }
    }

    /// Reject writes when the status changed after validation.
    #[must_use]
    pub const fn with_concurrency_guard(mut self, enabled: bool) -> Self {
        self.guard_concurrent_updates = enabled;
        self
    }

    /// Whether the compare-and-swap guard is on.
    #[must_use]
    pub const fn guards_concurrent_updates(&self) -> bool {
        self.guard_concurrent_updates
    }

    /// Move a load to `new_status` if the transition table allows it.
    ///
    /// Returns the recorded audit event.
    ///
    /// # Errors
    /// See [`LoadStatusError`] for the taxonomy. Nothing is written unless
    /// `Ok` is returned.
    pub async fn update_load_status(
        &self,
        organization_id: &str,
        load_id: &str,
        new_status: LoadStatus,
    ) -> Result<LoadStatusEvent, LoadStatusError> {
        let user_id = self.authorize().await?;
        let current = self.current_status(organization_id, load_id).await?;

        if !current.can_transition_to(new_status) {
            tracing::warn!(
                organization_id,
                load_id,
                from = %current,
                to = %new_status,
                "rejected status change"
            );
            return Err(LoadStatusError::InvalidTransition {
                from: current,
                to: new_status,
            });
        }

        let event = build_status_event(load_id, new_status);
        let expected = self.guard_concurrent_updates.then_some(current);
        self.store
            .apply_transition(organization_id, expected, event.clone())
            .await
            .map_err(|e| {
                tracing::error!(organization_id, load_id, error = %e, "status write failed");
                LoadStatusError::from(e)
            })?;

        tracing::info!(
            organization_id,
            load_id,
            user_id = %user_id,
            from = %current,
            to = %new_status,
            "load status updated"
        );
        Ok(event)
    }

    /// Statuses the load may move to next.
    ///
    /// # Errors
    /// `Unauthorized`, `NotFound` or `Persistence`.
    pub async fn allowed_next(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<&'static [LoadStatus], LoadStatusError> {
        self.authorize().await?;
        let current = self.current_status(organization_id, load_id).await?;
        Ok(current.allowed_next())
    }

    /// Audit trail of a load, oldest first.
    ///
    /// # Errors
    /// `Unauthorized`, `NotFound` or `Persistence`.
    pub async fn status_history(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Vec<LoadStatusEvent>, LoadStatusError> {
        self.authorize().await?;
        // Existence check keeps foreign loads from leaking an empty trail.
        self.current_status(organization_id, load_id).await?;
        Ok(self
            .store
            .list_status_events(organization_id, load_id)
            .await?)
    }

    async fn authorize(&self) -> Result<String, LoadStatusError> {
        self.session.current_user_id().await.ok_or_else(|| {
            tracing::warn!("status change attempted without a session");
            LoadStatusError::Unauthorized
        })
    }

    async fn current_status(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<LoadStatus, LoadStatusError> {
        let status = self
            .store
            .find_load_status(organization_id, load_id)
            .await?;
        tracing::debug!(organization_id, load_id, ?status, "looked up load status");
        status.ok_or(LoadStatusError::NotFound)
    }
}
