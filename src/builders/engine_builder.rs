//! Build a load status engine from configuration.

use std::sync::Arc;

use anyhow::{anyhow, Context};

use crate::config::{EngineConfig, StoreBackendConfig};
use crate::core::{AppResult, LoadStatusEngine, LoadStore, SessionProvider};
use crate::infra::InMemoryLoadStore;

/// Create the store selected by `cfg`.
///
/// # Errors
/// Invalid configuration, or a backend that fails to open.
pub async fn build_store(cfg: &EngineConfig) -> AppResult<Arc<dyn LoadStore>> {
    cfg.validate()
        .map_err(|e| anyhow!("config invalid: {e}"))?;

    match &cfg.store {
        StoreBackendConfig::InMemory => Ok(Arc::new(InMemoryLoadStore::new())),
        #[cfg(feature = "tokio-runtime")]
        StoreBackendConfig::File { path } => {
            let store = crate::infra::JsonlLoadStore::open(path)
                .await
                .with_context(|| format!("opening load journal in {}", path.display()))?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "tokio-runtime"))]
        StoreBackendConfig::File { .. } => Err(anyhow!(
            "file store requires the `tokio-runtime` feature"
        )),
    }
}

/// Create an engine with the configured store and the given session provider.
///
/// # Errors
/// See [`build_store`].
pub async fn build_engine(
    cfg: &EngineConfig,
    session: Arc<dyn SessionProvider>,
) -> AppResult<LoadStatusEngine> {
    let store = build_store(cfg).await?;
    tracing::info!(
        store = ?cfg.store,
        guard_concurrent_updates = cfg.guard_concurrent_updates,
        "built load status engine"
    );
    Ok(LoadStatusEngine::new(store, session).with_concurrency_guard(cfg.guard_concurrent_updates))
}
