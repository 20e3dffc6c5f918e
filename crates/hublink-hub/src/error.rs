//! Error types for hub operations.
//!
//! Every fallible path in this crate funnels into [`HubError`]. The adapter
//! reports errors to its caller as structured events carrying both the
//! display message and a stable code string, so each variant maps to a
//! fixed code via [`HubError::code`].

use thiserror::Error;

/// Result type alias for hub operations.
pub type HubResult<T> = Result<T, HubError>;

/// Errors surfaced by the wrapped hub client or by local filesystem work.
#[derive(Debug, Error)]
pub enum HubError {
    /// The wrapped `hf-hub` client failed (network, auth, missing repo...).
    #[error("hub API error: {0}")]
    Api(#[from] hf_hub::api::sync::ApiError),

    /// Local filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A supplied include/exclude glob pattern does not parse.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A filename from the remote repo listing would resolve outside the
    /// destination directory.
    #[error("unsafe path in repo listing: {0}")]
    UnsafePath(String),
}

impl HubError {
    /// Stable code string identifying the error class.
    ///
    /// This is the wire-level analogue of an exception type name and must
    /// not change between releases.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Api(_) => "ApiError",
            Self::Io(_) => "IoError",
            Self::Pattern(_) => "PatternError",
            Self::UnsafePath(_) => "PathError",
        }
    }
}
