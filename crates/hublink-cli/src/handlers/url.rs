//! Direct download URL resolution.

use std::io::Write;

use serde_json::json;

use crate::config::ResolvedParams;
use crate::events::{Emitter, Event};

/// Resolve the direct download URL for a file and emit it as `complete`.
pub fn execute<W: Write>(
    repo_id: &str,
    filename: &str,
    revision: &str,
    params: &ResolvedParams,
    emitter: &mut Emitter<W>,
) -> anyhow::Result<()> {
    let client = match super::client(params) {
        Ok(client) => client,
        Err(err) => return super::fail(emitter, err),
    };

    let url = client.resolve_url(repo_id, filename, revision);
    emitter.emit(&Event::complete(json!({
        "url": url,
        "repo_id": repo_id,
        "filename": filename,
    })))?;
    Ok(())
}
