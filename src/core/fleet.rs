//! Driver and vehicle status classification for dispatch boards.

use serde::{Deserialize, Serialize};

/// Coarse availability bucket shared by drivers and vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Can take a new load now.
    Ready,
    /// Working a load; will free up.
    Busy,
    /// Cannot be dispatched until someone intervenes.
    Unavailable,
}

impl Availability {
    /// Whether a new load may be assigned.
    #[must_use]
    pub const fn is_dispatchable(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Driver duty status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    /// On the roster and idle.
    Available,
    /// On duty, not driving.
    OnDuty,
    /// Behind the wheel.
    Driving,
    /// Off duty.
    OffDuty,
    /// Resting in the sleeper berth.
    SleeperBerth,
    /// Vacation or medical leave.
    OnLeave,
    /// No longer employed or suspended.
    Inactive,
}

impl DriverStatus {
    /// Availability bucket for dispatch.
    #[must_use]
    pub const fn availability(self) -> Availability {
        match self {
            Self::Available => Availability::Ready,
            Self::OnDuty | Self::Driving => Availability::Busy,
            Self::OffDuty | Self::SleeperBerth | Self::OnLeave | Self::Inactive => {
                Availability::Unavailable
            }
        }
    }

    /// Whether hours-of-service time is accruing.
    #[must_use]
    pub const fn is_on_duty(self) -> bool {
        matches!(self, Self::OnDuty | Self::Driving)
    }
}

/// Vehicle operating status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Parked and ready.
    Available,
    /// Assigned to a running load.
    InUse,
    /// In the shop.
    Maintenance,
    /// Failed inspection or grounded.
    OutOfService,
    /// Removed from the fleet.
    Retired,
}

impl VehicleStatus {
    /// Availability bucket for dispatch.
    #[must_use]
    pub const fn availability(self) -> Availability {
        match self {
            Self::Available => Availability::Ready,
            Self::InUse => Availability::Busy,
            Self::Maintenance | Self::OutOfService | Self::Retired => Availability::Unavailable,
        }
    }

    /// Whether the vehicle still counts toward fleet size.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Retired)
    }
}
