//! Base URL, bearer token and global headers for the backend API.
//!
//! # Design
//! `ApiConfig` is an immutable snapshot. `ConfigStore` holds the current
//! snapshot behind an `RwLock<Arc<_>>`: `set_config` swaps the whole `Arc`
//! in one write, and each request captures one `Arc` at call start. A call
//! that overlaps a `set_config` therefore sees either the old or the new
//! configuration, never a mixture. Last writer wins.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::headers::Headers;

/// One consistent view of the API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Bearer credential. Empty means requests go out unauthenticated.
    #[serde(default)]
    pub token: String,
    /// Prefix prepended verbatim to every endpoint.
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub global_headers: Headers,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_global_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_headers.insert(name, value);
        self
    }
}

/// Synchronized holder of the current `ApiConfig`.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<Arc<ApiConfig>>,
}

impl ConfigStore {
    /// A store initialised with empty values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ApiConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Replace token, base URL and global headers in one step.
    pub fn set_config(&self, token: impl Into<String>, base_url: impl Into<String>, global_headers: Headers) {
        self.replace(ApiConfig {
            token: token.into(),
            base_url: base_url.into(),
            global_headers,
        });
    }

    pub fn replace(&self, config: ApiConfig) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(config);
        tracing::debug!(base_url = %current.base_url, "api configuration replaced");
    }

    /// The snapshot a request should use from start to finish.
    pub fn snapshot(&self) -> Arc<ApiConfig> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn token(&self) -> String {
        self.snapshot().token.clone()
    }

    pub fn base_url(&self) -> String {
        self.snapshot().base_url.clone()
    }

    /// Never absent: an unset value is an empty map.
    pub fn global_headers(&self) -> Headers {
        self.snapshot().global_headers.clone()
    }
}

static GLOBAL: LazyLock<Arc<ConfigStore>> = LazyLock::new(|| Arc::new(ConfigStore::new()));

/// The process-wide store used by the free-standing `fetch_wrapper` function.
pub fn global_config() -> Arc<ConfigStore> {
    Arc::clone(&GLOBAL)
}

/// Overwrite the process-wide configuration.
///
/// Meant for startup; in-flight calls keep the snapshot they captured.
pub fn set_config(token: impl Into<String>, base_url: impl Into<String>, global_headers: Headers) {
    GLOBAL.set_config(token, base_url, global_headers);
}
