//! CLI entry point.
//!
//! Parses flags, resolves parameters from the environment once, and
//! dispatches to the handler for the selected operation. Stdout carries
//! the JSON event protocol; logs and usage errors go to stderr.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use hublink_cli::config::{SystemEnv, resolve_params, split_patterns};
use hublink_cli::handlers::{self, snapshot::SnapshotArgs};
use hublink_cli::{Cli, Mode, events};

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the event protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Usage errors exit through the parser before any JSON is emitted
    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(message) => Cli::command()
            .error(clap::error::ErrorKind::MissingRequiredArgument, message)
            .exit(),
    };

    let params = resolve_params(cli.token.clone(), cli.cache_dir.clone(), &SystemEnv);
    let mut emitter = events::stdout();

    match mode {
        Mode::Check => handlers::check::execute(&mut emitter),
        Mode::UrlOnly { repo_id, filename } => {
            handlers::url::execute(repo_id, filename, &cli.revision, &params, &mut emitter)
        }
        Mode::Snapshot { repo_id } => {
            let args = SnapshotArgs {
                repo_id,
                revision: &cli.revision,
                dest: cli.dest.as_deref(),
                allow_patterns: split_patterns(cli.allow_patterns.as_deref()),
                ignore_patterns: split_patterns(cli.ignore_patterns.as_deref()),
            };
            handlers::snapshot::execute(&args, &params, &mut emitter)
        }
        Mode::SingleFile { repo_id, filename } => handlers::single_file::execute(
            repo_id,
            filename,
            &cli.revision,
            cli.dest.as_deref(),
            &params,
            &mut emitter,
        ),
    }
}
