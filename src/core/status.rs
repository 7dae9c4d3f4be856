//! Load lifecycle statuses and the static transition table.
//!
//! Two lifecycles share one enumeration: the brokerage flow
//! (`draft -> posted -> booked -> confirmed -> dispatched -> ... -> delivered`)
//! and the asset flow (`pending -> assigned -> in_transit -> delivered`). Both
//! converge on `delivered` and then run through paperwork and billing.
//!
//! ```text
//! brokerage: draft ─► posted ─► booked ─► confirmed ─► dispatched ─► at_pickup
//!            ─► picked_up ─► en_route ─► at_delivery ─► delivered
//! asset:     pending ─► assigned ─► in_transit ─► delivered
//! closing:   delivered ─► pod_required ─► invoiced ─► paid
//!                     └─► completed
//! ```
//!
//! `completed`, `paid`, `cancelled` and `problem` are terminal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a load in its delivery lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Being drafted; not yet visible to dispatch.
    Draft,
    /// Created and awaiting assignment or posting.
    Pending,
    /// Posted to a load board.
    Posted,
    /// Booked with a carrier.
    Booked,
    /// Rate confirmation signed.
    Confirmed,
    /// Dispatched to the driver.
    Dispatched,
    /// Driver arrived at pickup.
    AtPickup,
    /// Freight picked up.
    PickedUp,
    /// Driving to the consignee.
    EnRoute,
    /// Driver arrived at delivery.
    AtDelivery,
    /// Freight delivered.
    Delivered,
    /// Driver and vehicle assigned.
    Assigned,
    /// Moving between pickup and delivery.
    InTransit,
    /// Delivered, waiting for proof of delivery.
    PodRequired,
    /// Closed without billing through this system.
    Completed,
    /// Invoice issued.
    Invoiced,
    /// Invoice paid.
    Paid,
    /// Cancelled before completion.
    Cancelled,
    /// Escalated for manual handling.
    Problem,
}

use LoadStatus::{
    Assigned, AtDelivery, AtPickup, Booked, Cancelled, Completed, Confirmed, Delivered, Dispatched,
    Draft, EnRoute, InTransit, Invoiced, Paid, Pending, PickedUp, PodRequired, Posted, Problem,
};

impl LoadStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 19] = [
        Draft,
        Pending,
        Posted,
        Booked,
        Confirmed,
        Dispatched,
        AtPickup,
        PickedUp,
        EnRoute,
        AtDelivery,
        Delivered,
        Assigned,
        InTransit,
        PodRequired,
        Completed,
        Invoiced,
        Paid,
        Cancelled,
        Problem,
    ];

    /// Statuses this one may move to next.
    #[must_use]
    pub const fn allowed_next(self) -> &'static [Self] {
        match self {
            Draft => &[Pending, Posted, Cancelled],
            Pending => &[Posted, Booked, Assigned, Cancelled, Problem],
            Posted => &[Booked, Cancelled],
            Booked => &[Confirmed, Assigned, Cancelled],
            Confirmed => &[Dispatched, Assigned, Cancelled],
            Dispatched => &[AtPickup, EnRoute, Cancelled, Problem],
            AtPickup => &[PickedUp, Problem],
            PickedUp => &[EnRoute, InTransit, Problem],
            EnRoute => &[AtDelivery, Problem],
            AtDelivery => &[Delivered, Problem],
            Assigned => &[InTransit, Cancelled, Problem],
            InTransit => &[Delivered, Problem],
            Delivered => &[PodRequired, Invoiced, Completed],
            PodRequired => &[Invoiced, Completed, Problem],
            Invoiced => &[Paid, Problem],
            Completed | Paid | Cancelled | Problem => &[],
        }
    }

    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next().contains(&next)
    }

    /// Whether no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }

    /// Wire name (`snake_case`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Draft => "draft",
            Pending => "pending",
            Posted => "posted",
            Booked => "booked",
            Confirmed => "confirmed",
            Dispatched => "dispatched",
            AtPickup => "at_pickup",
            PickedUp => "picked_up",
            EnRoute => "en_route",
            AtDelivery => "at_delivery",
            Delivered => "delivered",
            Assigned => "assigned",
            InTransit => "in_transit",
            PodRequired => "pod_required",
            Completed => "completed",
            Invoiced => "invoiced",
            Paid => "paid",
            Cancelled => "cancelled",
            Problem => "problem",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown load status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for LoadStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Iterate every `(from, to)` edge of the transition table.
pub fn transition_edges() -> impl Iterator<Item = (LoadStatus, LoadStatus)> {
    LoadStatus::ALL
        .into_iter()
        .flat_map(|from| from.allowed_next().iter().map(move |&to| (from, to)))
}
