//! Engine configuration structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the store backend (`in_memory` or `file`).
pub const ENV_STORE_BACKEND: &str = "FLEET_STORE_BACKEND";
/// Environment variable with the journal directory for the `file` backend.
pub const ENV_STORE_PATH: &str = "FLEET_STORE_PATH";
/// Environment variable enabling the compare-and-swap guard (`true`/`false`).
pub const ENV_GUARD_CONCURRENT_UPDATES: &str = "FLEET_GUARD_CONCURRENT_UPDATES";

/// Store backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StoreBackendConfig {
    /// In-memory store for development/testing.
    InMemory,
    /// JSON-lines journal under a directory.
    File {
        /// Directory holding the journal.
        path: PathBuf,
    },
}

/// Root engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Where loads and events live.
    pub store: StoreBackendConfig,
    /// Reject transitions whose validated status went stale before the write.
    #[serde(default)]
    pub guard_concurrent_updates: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store: StoreBackendConfig::InMemory,
            guard_concurrent_updates: false,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    /// Describes the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if let StoreBackendConfig::File { path } = &self.store {
            if path.as_os_str().is_empty() {
                return Err("file store path must not be empty".into());
            }
        }
        Ok(())
    }

    /// Parse engine configuration from a JSON string and validate.
    ///
    /// # Errors
    /// Parse or validation failures.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment, loading `.env` first.
    ///
    /// # Errors
    /// Unknown backend names, unparsable booleans, or a `file` backend
    /// without a path.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Same as [`EngineConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup(ENV_STORE_BACKEND).as_deref().map(str::trim) {
            None | Some("" | "in_memory") => StoreBackendConfig::InMemory,
            Some("file") => {
                let path = lookup(ENV_STORE_PATH)
                    .ok_or_else(|| format!("{ENV_STORE_PATH} is required for the file backend"))?;
                StoreBackendConfig::File { path: path.into() }
            }
            Some(other) => return Err(format!("unknown store backend `{other}`")),
        };
        let guard_concurrent_updates = match lookup(ENV_GUARD_CONCURRENT_UPDATES) {
            None => false,
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| format!("{ENV_GUARD_CONCURRENT_UPDATES} must be true or false, got `{raw}`"))?,
        };
        let cfg = Self {
            store,
            guard_concurrent_updates,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}
