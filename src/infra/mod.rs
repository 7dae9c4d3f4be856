//! Infrastructure adapters for load storage and sessions.

pub mod session;
pub mod store;

pub use session::StaticSession;
pub use store::InMemoryLoadStore;
#[cfg(feature = "tokio-runtime")]
pub use store::JsonlLoadStore;
