//! Parameter resolution from flags and environment variables.
//!
//! Runs exactly once at startup, before any operation is dispatched.
//! Environment access goes through [`EnvProvider`] so resolution is
//! testable without mutating the process environment.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable consulted when `--token` is omitted.
pub const TOKEN_VAR: &str = "HF_TOKEN";

/// Environment variables consulted when `--cache-dir` is omitted,
/// first defined wins.
pub const CACHE_VARS: [&str; 2] = ["HF_HUB_CACHE", "HUGGINGFACE_HUB_CACHE"];

/// Trait for accessing environment variables (injectable for testing).
pub trait EnvProvider {
    /// Get an environment variable.
    fn get(&self, key: &str) -> Option<OsString>;
}

/// Production environment provider that reads from the actual process
/// environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Final call parameters after flag/environment resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    /// Authentication token, if any.
    pub token: Option<String>,
    /// Cache directory override, if any.
    pub cache_dir: Option<PathBuf>,
}

/// Resolve the token and cache directory, preferring explicit flags over
/// environment fallbacks.
pub fn resolve_params(
    token_flag: Option<String>,
    cache_flag: Option<PathBuf>,
    env: &impl EnvProvider,
) -> ResolvedParams {
    let token = token_flag.or_else(|| env.get(TOKEN_VAR).and_then(|v| v.into_string().ok()));

    let cache_dir = cache_flag.or_else(|| {
        CACHE_VARS
            .iter()
            .find_map(|var| env.get(var))
            .map(PathBuf::from)
    });

    ResolvedParams { token, cache_dir }
}

/// Split a comma-separated pattern string into an ordered list.
///
/// An absent or empty string yields `None` (no filtering).
pub fn split_patterns(raw: Option<&str>) -> Option<Vec<String>> {
    raw.filter(|s| !s.is_empty())
        .map(|s| s.split(',').map(ToString::to_string).collect())
}
