//! Public configuration for the hub client.
//!
//! Parameter resolution (CLI flags, environment fallbacks) happens in the
//! adapter; by the time a config reaches this crate every value is final.

use std::path::PathBuf;

/// Configuration for [`crate::HubClient`].
///
/// # Example
///
/// ```
/// use hublink_hub::HubClientConfig;
///
/// let config = HubClientConfig::new()
///     .with_optional_token(Some("hf_xxx".to_string()))
///     .with_cache_dir("/tmp/hub-cache");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HubClientConfig {
    /// Optional authentication token for gated/private repositories.
    pub(crate) token: Option<String>,
    /// Cache directory; `None` uses the library default location.
    pub(crate) cache_dir: Option<PathBuf>,
}

impl HubClientConfig {
    /// Create a configuration with default settings (no token, default cache).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an authentication token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional authentication token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set the cache directory used for downloaded files.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set an optional cache directory.
    #[must_use]
    pub fn with_optional_cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.cache_dir = dir;
        self
    }
}
