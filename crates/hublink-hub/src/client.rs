//! Synchronous hub client wrapping `hf_hub::api::sync`.
//!
//! One blocking operation runs per client call; progress is surfaced
//! through a caller-supplied [`ProgressSink`] during that call.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use hf_hub::api::Progress;
use hf_hub::api::sync::{Api, ApiBuilder, ApiRepo};
use hf_hub::{Cache, Repo, RepoType};
use tracing::{debug, info};

use crate::config::HubClientConfig;
use crate::error::{HubError, HubResult};
use crate::patterns::PatternSet;
use crate::progress::ProgressSink;

/// Bridges the `hf-hub` progress callbacks onto a [`ProgressSink`].
struct SinkAdapter<'a, S: ProgressSink>(&'a mut S);

impl<S: ProgressSink> Progress for SinkAdapter<'_, S> {
    fn init(&mut self, size: usize, filename: &str) {
        self.0.begin(size as u64, filename);
    }

    fn update(&mut self, size: usize) {
        self.0.advance(size as u64);
    }

    fn finish(&mut self) {
        self.0.complete();
    }
}

/// Blocking client for the four hub operations.
pub struct HubClient {
    api: Api,
    cache: Cache,
    cache_root: PathBuf,
}

impl HubClient {
    /// Build a client from a resolved configuration.
    ///
    /// Fails only if the underlying library cannot set up its cache
    /// directory or HTTP agent.
    pub fn new(config: &HubClientConfig) -> HubResult<Self> {
        let cache_root = config
            .cache_dir
            .clone()
            .unwrap_or_else(default_cache_root);

        let api = ApiBuilder::new()
            .with_token(config.token.clone())
            .with_cache_dir(cache_root.clone())
            // stdout carries the event protocol; no terminal progress bars
            .with_progress(false)
            .build()?;

        Ok(Self {
            api,
            cache: Cache::new(cache_root.clone()),
            cache_root,
        })
    }

    /// Resolve the direct download URL for a file without touching the
    /// network.
    pub fn resolve_url(&self, repo_id: &str, filename: &str, revision: &str) -> String {
        self.api.repo(make_repo(repo_id, revision)).url(filename)
    }

    /// Download a single file, reusing the cache when the file is already
    /// present.
    ///
    /// With a `dest` directory the cached file is materialized there
    /// (hard-link, falling back to copy) and the destination path is
    /// returned; otherwise the cache path is returned.
    pub fn download_file(
        &self,
        repo_id: &str,
        filename: &str,
        revision: &str,
        dest: Option<&Path>,
        sink: &mut impl ProgressSink,
    ) -> HubResult<PathBuf> {
        let repo = make_repo(repo_id, revision);
        let api_repo = self.api.repo(repo.clone());

        info!(repo_id, filename, revision, "downloading file");
        let cached = self.fetch(&api_repo, &repo, filename, sink)?;

        match dest {
            Some(dir) => {
                let local = dir.join(filename);
                materialize(&cached, &local)?;
                Ok(local)
            }
            None => Ok(cached),
        }
    }

    /// Download a full repository snapshot at the given revision.
    ///
    /// Lists the repo's files, applies the allow/ignore filters, downloads
    /// each survivor and returns the snapshot root: `dest` when given,
    /// otherwise the cache's snapshot directory for the resolved commit.
    pub fn snapshot(
        &self,
        repo_id: &str,
        revision: &str,
        patterns: &PatternSet,
        dest: Option<&Path>,
        sink: &mut impl ProgressSink,
    ) -> HubResult<PathBuf> {
        let repo = make_repo(repo_id, revision);
        let api_repo = self.api.repo(repo.clone());

        let repo_info = api_repo.info()?;
        info!(
            repo_id,
            revision,
            sha = %repo_info.sha,
            files = repo_info.siblings.len(),
            "downloading snapshot"
        );

        for sibling in &repo_info.siblings {
            let rfilename = &sibling.rfilename;
            if !patterns.matches(rfilename) {
                debug!(rfilename, "filtered out");
                continue;
            }

            let cached = self.fetch(&api_repo, &repo, rfilename, sink)?;
            if let Some(dir) = dest {
                let local = snapshot_target(dir, rfilename)
                    .ok_or_else(|| HubError::UnsafePath(rfilename.clone()))?;
                materialize(&cached, &local)?;
            }
        }

        Ok(dest.map_or_else(
            || {
                self.cache_root
                    .join(repo.folder_name())
                    .join("snapshots")
                    .join(&repo_info.sha)
            },
            Path::to_path_buf,
        ))
    }

    /// Cache lookup, then delegated download on a miss.
    fn fetch(
        &self,
        api_repo: &ApiRepo,
        repo: &Repo,
        filename: &str,
        sink: &mut impl ProgressSink,
    ) -> HubResult<PathBuf> {
        if let Some(cached) = self.cache.repo(repo.clone()).get(filename) {
            debug!(filename, "cache hit");
            return Ok(cached);
        }
        Ok(api_repo.download_with_progress(filename, SinkAdapter(sink))?)
    }
}

fn make_repo(repo_id: &str, revision: &str) -> Repo {
    Repo::with_revision(repo_id.to_string(), RepoType::Model, revision.to_string())
}

/// Default cache location, matching the wrapped library's convention
/// (`$HF_HOME/hub`, else `~/.cache/huggingface/hub`).
fn default_cache_root() -> PathBuf {
    std::env::var_os("HF_HOME")
        .map_or_else(
            || {
                dirs::home_dir()
                    .unwrap_or_else(std::env::temp_dir)
                    .join(".cache")
                    .join("huggingface")
            },
            PathBuf::from,
        )
        .join("hub")
}

/// Join a repo-relative filename onto `dir`.
///
/// The filename comes verbatim from the remote repo listing, so only plain
/// relative components are accepted; anything with a root, prefix or `..`
/// would land the file outside `dir` and is rejected.
fn snapshot_target(dir: &Path, rfilename: &str) -> Option<PathBuf> {
    let relative = Path::new(rfilename);
    if relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(dir.join(relative))
    } else {
        None
    }
}

/// Place `cached` at `local`, preferring a hard link over a copy.
fn materialize(cached: &Path, local: &Path) -> io::Result<()> {
    if let Some(parent) = local.parent() {
        fs::create_dir_all(parent)?;
    }
    if local.exists() {
        fs::remove_file(local)?;
    }
    if fs::hard_link(cached, local).is_err() {
        fs::copy(cached, local)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HubClientConfig, NoopProgress};
    use std::io::Write;
    use tempfile::tempdir;

    fn offline_client(cache: &Path) -> HubClient {
        HubClient::new(&HubClientConfig::new().with_cache_dir(cache)).unwrap()
    }

    #[test]
    fn test_resolve_url_contains_repo_and_file() {
        let dir = tempdir().unwrap();
        let client = offline_client(dir.path());

        let url = client.resolve_url("gpt2", "config.json", "main");
        assert!(url.contains("gpt2"));
        assert!(url.contains("config.json"));
        assert!(url.contains("main"));
    }

    #[test]
    fn test_resolve_url_uses_revision() {
        let dir = tempdir().unwrap();
        let client = offline_client(dir.path());

        let url = client.resolve_url("owner/name", "model.bin", "v1.0");
        assert!(url.contains("v1.0"));
        assert!(!url.contains("/main/"));
    }

    #[test]
    fn test_materialize_copies_into_nested_dest() {
        let dir = tempdir().unwrap();
        let cached = dir.path().join("cached.bin");
        std::fs::File::create(&cached)
            .unwrap()
            .write_all(b"payload")
            .unwrap();

        let local = dir.path().join("dest/sub/file.bin");
        materialize(&cached, &local).unwrap();

        assert_eq!(std::fs::read(&local).unwrap(), b"payload");
    }

    #[test]
    fn test_materialize_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let cached = dir.path().join("cached.bin");
        std::fs::write(&cached, b"new").unwrap();

        let local = dir.path().join("file.bin");
        std::fs::write(&local, b"old-content").unwrap();

        materialize(&cached, &local).unwrap();
        assert_eq!(std::fs::read(&local).unwrap(), b"new");
    }

    #[test]
    fn test_default_cache_root_ends_with_hub() {
        assert!(default_cache_root().ends_with("hub"));
    }

    #[test]
    fn test_snapshot_target_stays_under_dest() {
        let dir = Path::new("/dest");
        let target = snapshot_target(dir, "weights/model-00001.safetensors").unwrap();
        assert!(target.starts_with(dir));
    }

    #[test]
    fn test_snapshot_target_rejects_escaping_filenames() {
        let dir = Path::new("/dest");
        assert!(snapshot_target(dir, "../escaped.bin").is_none());
        assert!(snapshot_target(dir, "sub/../../escaped.bin").is_none());
        assert!(snapshot_target(dir, "/etc/passwd").is_none());
    }

    /// Lay out the wrapped library's cache: `refs/<revision>` names a
    /// commit, `snapshots/<commit>/` holds the files.
    fn seed_cache(
        cache_root: &Path,
        repo_id: &str,
        revision: &str,
        sha: &str,
        filename: &str,
        contents: &[u8],
    ) -> PathBuf {
        let repo_root = cache_root.join(make_repo(repo_id, revision).folder_name());
        let refs = repo_root.join("refs");
        fs::create_dir_all(&refs).unwrap();
        fs::write(refs.join(revision), sha).unwrap();

        let snapshot = repo_root.join("snapshots").join(sha);
        fs::create_dir_all(&snapshot).unwrap();
        let path = snapshot.join(filename);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_download_file_reuses_cached_file() {
        let dir = tempdir().unwrap();
        let cached = seed_cache(dir.path(), "gpt2", "main", "abc123", "config.json", b"{}");

        let client = offline_client(dir.path());
        let path = client
            .download_file("gpt2", "config.json", "main", None, &mut NoopProgress)
            .unwrap();

        assert_eq!(path, cached);
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn test_download_file_materializes_cache_hit_into_dest() {
        let dir = tempdir().unwrap();
        seed_cache(dir.path(), "gpt2", "main", "abc123", "config.json", b"{}");

        let dest = dir.path().join("out");
        let client = offline_client(dir.path());
        let path = client
            .download_file("gpt2", "config.json", "main", Some(&dest), &mut NoopProgress)
            .unwrap();

        assert_eq!(path, dest.join("config.json"));
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }
}
