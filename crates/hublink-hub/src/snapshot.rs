//! Snapshot tree aggregation.
//!
//! After a snapshot download the adapter reports how much actually landed
//! on disk. Symbolic links are skipped so files shared with the cache via
//! symlinks are not double counted.

use std::fs;
use std::io;
use std::path::Path;

/// Aggregate statistics for a downloaded snapshot tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotStats {
    /// Number of regular (non-symlink) files under the tree.
    pub file_count: u64,
    /// Sum of their sizes in bytes.
    pub total_size: u64,
}

/// Walk `root` recursively and total up regular files.
///
/// A missing root yields empty stats rather than an error, matching the
/// behavior of reporting on a snapshot that produced no files.
pub fn aggregate_stats(root: &Path) -> io::Result<SnapshotStats> {
    let mut stats = SnapshotStats::default();
    if root.exists() {
        walk(root, &mut stats)?;
    }
    Ok(stats)
}

fn walk(dir: &Path, stats: &mut SnapshotStats) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type() does not follow symlinks
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            walk(&entry.path(), stats)?;
        } else if file_type.is_file() {
            stats.total_size += entry.metadata()?.len();
            stats.file_count += 1;
        }
    }
    Ok(())
}
