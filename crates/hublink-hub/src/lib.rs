//! Thin wrapper around the `hf-hub` crate.
//!
//! This crate does not implement any transfer logic of its own: networking,
//! caching, resumability and chunked downloads are entirely the `hf-hub`
//! library's responsibility. What lives here is the normalization layer the
//! `hublink` binary needs on top of it: client configuration, the four hub
//! operations (single-file download, snapshot download, URL resolution,
//! availability), glob filtering for snapshots, and snapshot aggregation.

#![deny(unsafe_code)]

mod client;
mod config;
mod error;
mod patterns;
mod progress;
mod snapshot;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::HubClient;

// Configuration
pub use config::HubClientConfig;

// Errors
pub use error::{HubError, HubResult};

// Snapshot filtering and aggregation
pub use patterns::PatternSet;
pub use snapshot::{SnapshotStats, aggregate_stats};

// Progress reporting
pub use progress::{NoopProgress, ProgressSink, ProgressThrottle};

/// Version of this wrapper crate, reported by the availability check.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
