//! Load store backends.

pub mod memory;
#[cfg(feature = "tokio-runtime")]
pub mod jsonl;

pub use memory::InMemoryLoadStore;
#[cfg(feature = "tokio-runtime")]
pub use jsonl::JsonlLoadStore;
