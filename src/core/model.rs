//! Load entity as seen by the status engine.

use serde::{Deserialize, Serialize};

use super::status::LoadStatus;

/// A shipment owned by one organization.
///
/// Creation happens outside this crate; the engine only reads and transitions
/// `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Load {
    /// Load identifier.
    pub id: String,
    /// Owning organization (tenant).
    pub organization_id: String,
    /// Current lifecycle status.
    pub status: LoadStatus,
    /// Assigned driver, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    /// Assigned vehicle, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
}

impl Load {
    /// Create an unassigned load.
    pub fn new(
        id: impl Into<String>,
        organization_id: impl Into<String>,
        status: LoadStatus,
    ) -> Self {
        Self {
            id: id.into(),
            organization_id: organization_id.into(),
            status,
            driver_id: None,
            vehicle_id: None,
        }
    }

    /// Attach a driver.
    #[must_use]
    pub fn with_driver(mut self, driver_id: impl Into<String>) -> Self {
        self.driver_id = Some(driver_id.into());
        self
    }

    /// Attach a vehicle.
    #[must_use]
    pub fn with_vehicle(mut self, vehicle_id: impl Into<String>) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    /// Whether this load belongs to `organization_id`.
    #[must_use]
    pub fn is_owned_by(&self, organization_id: &str) -> bool {
        self.organization_id == organization_id
    }
}
