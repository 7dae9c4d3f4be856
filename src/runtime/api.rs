//! API-facing request/response models.
//!
//! Every engine error is folded into an [`ActionResult`] here; nothing
//! propagates to the caller as a fault.

use serde::{Deserialize, Serialize};

use crate::core::{LoadStatus, LoadStatusEngine, LoadStatusError};

/// Status change submitted from a form or API route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoadStatusRequest {
    /// Caller's organization.
    pub organization_id: String,
    /// Load to transition.
    pub load_id: String,
    /// Requested status.
    pub new_status: LoadStatus,
}

/// Uniform outcome of a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the mutation was applied.
    pub success: bool,
    /// User-facing reason when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    /// Successful result.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Failed result with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

impl From<&LoadStatusError> for ActionResult {
    fn from(err: &LoadStatusError) -> Self {
        Self::failure(err.user_message())
    }
}

/// Permitted next statuses for a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedStatusesResponse {
    /// Statuses selectable from the current one.
    pub statuses: Vec<LoadStatus>,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Apply a status change and fold the outcome into an [`ActionResult`].
pub async fn update_load_status_action(
    engine: &LoadStatusEngine,
    req: UpdateLoadStatusRequest,
) -> ActionResult {
    match engine
        .update_load_status(&req.organization_id, &req.load_id, req.new_status)
        .await
    {
        Ok(_) => ActionResult::ok(),
        Err(err) => {
            tracing::debug!(load_id = %req.load_id, error = %err, "status action failed");
            ActionResult::from(&err)
        }
    }
}

/// Same as [`update_load_status_action`] for raw form fields.
///
/// An unknown status name is reported as an invalid status change without
/// touching the engine.
pub async fn update_load_status_form(
    engine: &LoadStatusEngine,
    organization_id: &str,
    load_id: &str,
    new_status: &str,
) -> ActionResult {
    let Ok(new_status) = new_status.parse::<LoadStatus>() else {
        return ActionResult::failure("Invalid status change");
    };
    update_load_status_action(
        engine,
        UpdateLoadStatusRequest {
            organization_id: organization_id.to_string(),
            load_id: load_id.to_string(),
            new_status,
        },
    )
    .await
}

/// Permitted next statuses, or a failure message.
///
/// # Errors
/// The user-facing [`ActionResult`] of the engine error.
pub async fn allowed_statuses(
    engine: &LoadStatusEngine,
    organization_id: &str,
    load_id: &str,
) -> Result<AllowedStatusesResponse, ActionResult> {
    engine
        .allowed_next(organization_id, load_id)
        .await
        .map(|next| AllowedStatusesResponse {
            statuses: next.to_vec(),
        })
        .map_err(|err| ActionResult::from(&err))
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}
