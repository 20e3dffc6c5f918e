//! One handler per operation mode.
//!
//! Every handler owns the full event lifecycle for its operation: it emits
//! `start` where the protocol calls for one, exactly one terminal event,
//! and propagates failures so the process exits non-zero.

pub mod check;
pub mod single_file;
pub mod snapshot;
pub mod url;

use std::io::Write;

use hublink_hub::{HubClient, HubClientConfig, HubError, HubResult};
use tracing::error;

use crate::config::ResolvedParams;
use crate::events::{Emitter, Event};

/// Build the hub client from resolved parameters.
fn client(params: &ResolvedParams) -> HubResult<HubClient> {
    HubClient::new(
        &HubClientConfig::new()
            .with_optional_token(params.token.clone())
            .with_optional_cache_dir(params.cache_dir.clone()),
    )
}

/// Report an operation failure: one `error` event, then propagate.
///
/// The event is a side-channel notification; the returned `Err` is what
/// actually drives the non-zero exit code.
fn fail<W: Write, T>(emitter: &mut Emitter<W>, err: HubError) -> anyhow::Result<T> {
    error!(code = err.code(), "operation failed: {err}");
    emitter.emit(&Event::failure(&err))?;
    Err(err.into())
}
