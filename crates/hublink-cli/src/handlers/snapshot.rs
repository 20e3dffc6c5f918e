//! Full repository snapshot download.

use std::io::Write;
use std::path::Path;

use hublink_hub::{PatternSet, aggregate_stats};
use serde_json::json;

use crate::config::ResolvedParams;
use crate::events::{Emitter, Event};
use crate::reporter::EventReporter;

/// Arguments for a snapshot download.
pub struct SnapshotArgs<'a> {
    pub repo_id: &'a str,
    pub revision: &'a str,
    pub dest: Option<&'a Path>,
    pub allow_patterns: Option<Vec<String>>,
    pub ignore_patterns: Option<Vec<String>>,
}

/// Download a repository snapshot, then walk the resulting tree and report
/// aggregate file count and byte size in the `complete` event.
pub fn execute<W: Write>(
    args: &SnapshotArgs<'_>,
    params: &ResolvedParams,
    emitter: &mut Emitter<W>,
) -> anyhow::Result<()> {
    emitter.emit(&Event::start(json!({
        "repo_id": args.repo_id,
        "revision": args.revision,
        "type": "snapshot",
    })))?;

    let patterns = match PatternSet::compile(
        args.allow_patterns.as_deref(),
        args.ignore_patterns.as_deref(),
    ) {
        Ok(patterns) => patterns,
        Err(err) => return super::fail(emitter, err.into()),
    };

    let client = match super::client(params) {
        Ok(client) => client,
        Err(err) => return super::fail(emitter, err),
    };

    let result = {
        let mut reporter = EventReporter::new(emitter);
        client.snapshot(
            args.repo_id,
            args.revision,
            &patterns,
            args.dest,
            &mut reporter,
        )
    };

    let snapshot_path = match result {
        Ok(path) => path,
        Err(err) => return super::fail(emitter, err),
    };

    match aggregate_stats(&snapshot_path) {
        Ok(stats) => {
            emitter.emit(&Event::complete(json!({
                "snapshot_path": snapshot_path.display().to_string(),
                "file_count": stats.file_count,
                "total_size": stats.total_size,
                "repo_id": args.repo_id,
            })))?;
            Ok(())
        }
        Err(err) => super::fail(emitter, err.into()),
    }
}
