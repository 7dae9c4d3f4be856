//! Session providers for wiring without a real auth service.

use async_trait::async_trait;

use crate::core::SessionProvider;

/// Session provider that always reports the same user (or none).
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    /// A session signed in as `user_id`.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// No session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}
