//! CLI adapter exposing hub downloads to a calling process.
//!
//! The binary translates flags and environment variables into normalized
//! hub calls and reports results as line-delimited JSON events on stdout.
//! Stdout is reserved for that protocol; all diagnostics go to stderr.

#![deny(unsafe_code)]

pub mod config;
pub mod events;
pub mod handlers;
pub mod parser;
pub mod reporter;

pub use parser::{Cli, Mode};
