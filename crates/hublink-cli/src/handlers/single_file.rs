//! Single-file download.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::json;

use crate::config::ResolvedParams;
use crate::events::{Emitter, Event};
use crate::reporter::EventReporter;

/// Download one file: `start`, rate-limited `progress`, then `complete`
/// with the local path and byte size. On failure one `error` event is
/// emitted and the error propagates.
pub fn execute<W: Write>(
    repo_id: &str,
    filename: &str,
    revision: &str,
    dest: Option<&Path>,
    params: &ResolvedParams,
    emitter: &mut Emitter<W>,
) -> anyhow::Result<()> {
    emitter.emit(&Event::start(json!({
        "repo_id": repo_id,
        "filename": filename,
        "revision": revision,
    })))?;

    let client = match super::client(params) {
        Ok(client) => client,
        Err(err) => return super::fail(emitter, err),
    };

    let result = {
        let mut reporter = EventReporter::new(emitter);
        client.download_file(repo_id, filename, revision, dest, &mut reporter)
    };

    match result {
        Ok(file_path) => {
            let file_size = fs::metadata(&file_path).map_or(0, |m| m.len());
            emitter.emit(&Event::complete(json!({
                "file_path": file_path.display().to_string(),
                "file_size": file_size,
                "repo_id": repo_id,
                "filename": filename,
            })))?;
            Ok(())
        }
        Err(err) => super::fail(emitter, err),
    }
}
