//! Shared utilities: clock, identifiers, serde helpers, telemetry.

pub mod clock;
pub mod ids;
pub mod serde;
pub mod telemetry;

pub use clock::*;
pub use ids::*;
pub use telemetry::*;
