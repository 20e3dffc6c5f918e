//! Command-line argument definitions and mode selection.

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  # Download a single file
  hublink --repo-id gpt2 --filename config.json

  # Download to a specific directory
  hublink --repo-id gpt2 --filename config.json --dest ./models

  # Download from a specific revision
  hublink --repo-id gpt2 --filename config.json --revision v1.0

  # Download an entire repository
  hublink --repo-id gpt2 --snapshot --dest ./models/gpt2

  # Resolve the download URL only
  hublink --repo-id gpt2 --filename config.json --url-only

  # Check hub client availability
  hublink --check";

/// Command-line interface for the hub download adapter.
#[derive(Debug, Parser)]
#[command(name = "hublink")]
#[command(about = "Download files and snapshots from the HuggingFace Hub, reporting JSON events")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Repository ID (e.g. 'username/repo-name')
    #[arg(long)]
    pub repo_id: Option<String>,

    /// File name to download
    #[arg(long)]
    pub filename: Option<String>,

    /// Destination directory
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Git revision (branch, tag, or commit hash)
    #[arg(long, default_value = "main")]
    pub revision: String,

    /// Authentication token (falls back to HF_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Cache directory (falls back to HF_HUB_CACHE, then HUGGINGFACE_HUB_CACHE)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Download the entire repository snapshot
    #[arg(long)]
    pub snapshot: bool,

    /// Comma-separated glob patterns to include (snapshot only)
    #[arg(long)]
    pub allow_patterns: Option<String>,

    /// Comma-separated glob patterns to exclude (snapshot only)
    #[arg(long)]
    pub ignore_patterns: Option<String>,

    /// Only resolve the download URL
    #[arg(long)]
    pub url_only: bool,

    /// Check whether the hub client is available
    #[arg(long)]
    pub check: bool,
}

/// The single operation selected by an invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Report hub client availability.
    Check,
    /// Resolve a direct download URL.
    UrlOnly { repo_id: &'a str, filename: &'a str },
    /// Download a full repository snapshot.
    Snapshot { repo_id: &'a str },
    /// Download a single file.
    SingleFile { repo_id: &'a str, filename: &'a str },
}

impl Cli {
    /// Determine the operation mode, validating cross-flag requirements.
    ///
    /// Errors carry the message to report through the argument parser's
    /// standard error path, before any JSON is emitted.
    pub fn mode(&self) -> Result<Mode<'_>, String> {
        if self.check {
            return Ok(Mode::Check);
        }

        let Some(repo_id) = self.repo_id.as_deref() else {
            return Err("--repo-id is required (unless using --check)".to_string());
        };

        if self.url_only {
            return match self.filename.as_deref() {
                Some(filename) => Ok(Mode::UrlOnly { repo_id, filename }),
                None => Err("--filename is required for --url-only".to_string()),
            };
        }

        if self.snapshot {
            return Ok(Mode::Snapshot { repo_id });
        }

        match self.filename.as_deref() {
            Some(filename) => Ok(Mode::SingleFile { repo_id, filename }),
            None => Err("--filename or --snapshot is required".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_mode_needs_no_repo() {
        let cli = Cli::parse_from(["hublink", "--check"]);
        assert_eq!(cli.mode(), Ok(Mode::Check));
    }

    #[test]
    fn test_repo_id_required_without_check() {
        let cli = Cli::parse_from(["hublink", "--filename", "config.json"]);
        assert!(cli.mode().is_err());
    }

    #[test]
    fn test_single_file_mode() {
        let cli = Cli::parse_from(["hublink", "--repo-id", "gpt2", "--filename", "config.json"]);
        assert_eq!(
            cli.mode(),
            Ok(Mode::SingleFile {
                repo_id: "gpt2",
                filename: "config.json"
            })
        );
    }

    #[test]
    fn test_single_file_requires_filename() {
        let cli = Cli::parse_from(["hublink", "--repo-id", "gpt2"]);
        let err = cli.mode().unwrap_err();
        assert!(err.contains("--filename or --snapshot"));
    }

    #[test]
    fn test_url_only_requires_filename() {
        let cli = Cli::parse_from(["hublink", "--repo-id", "gpt2", "--url-only"]);
        let err = cli.mode().unwrap_err();
        assert!(err.contains("--url-only"));
    }

    #[test]
    fn test_url_only_mode() {
        let cli = Cli::parse_from([
            "hublink",
            "--repo-id",
            "gpt2",
            "--filename",
            "model.bin",
            "--url-only",
        ]);
        assert_eq!(
            cli.mode(),
            Ok(Mode::UrlOnly {
                repo_id: "gpt2",
                filename: "model.bin"
            })
        );
    }

    #[test]
    fn test_snapshot_mode_without_filename() {
        let cli = Cli::parse_from(["hublink", "--repo-id", "gpt2", "--snapshot"]);
        assert_eq!(cli.mode(), Ok(Mode::Snapshot { repo_id: "gpt2" }));
    }

    #[test]
    fn test_revision_default() {
        let cli = Cli::parse_from(["hublink", "--check"]);
        assert_eq!(cli.revision, "main");
    }

    #[test]
    fn test_pattern_flags_parse() {
        let cli = Cli::parse_from([
            "hublink",
            "--repo-id",
            "gpt2",
            "--snapshot",
            "--allow-patterns",
            "*.json,*.txt",
            "--ignore-patterns",
            "*.bin",
        ]);
        assert_eq!(cli.allow_patterns.as_deref(), Some("*.json,*.txt"));
        assert_eq!(cli.ignore_patterns.as_deref(), Some("*.bin"));
    }
}
