//! Core domain: statuses, transition rules, the engine and its collaborators.

pub mod audit;
pub mod engine;
pub mod error;
pub mod fleet;
pub mod model;
pub mod status;
pub mod store;

pub use audit::{build_status_event, LoadStatusEvent};
pub use engine::LoadStatusEngine;
pub use error::{AppResult, LoadStatusError, StoreError};
pub use fleet::{Availability, DriverStatus, VehicleStatus};
pub use model::Load;
pub use status::{transition_edges, LoadStatus, UnknownStatus};
pub use store::{LoadStore, SessionProvider};
