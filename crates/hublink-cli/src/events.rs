//! The JSON-line event protocol on stdout.
//!
//! One JSON object per line, flushed per event. Every invocation produces
//! at most one `start`, zero or more `progress`, and exactly one terminal
//! event (`complete` or `error`).
//!
//! # Protocol Schema
//!
//! ```json
//! {"type": "start",    "data": {"repo_id": "gpt2", "filename": "config.json", "revision": "main"}}
//! {"type": "progress", "data": {"current": 123456, "total": 789012, "percentage": 15.6}}
//! {"type": "complete", "data": {"file_path": "/path", "file_size": 789012}}
//! {"type": "error",    "data": {"message": "...", "code": "ApiError"}}
//! ```

use std::io::{self, Write};

use hublink_hub::HubError;
use serde::Serialize;
use serde_json::Value;

/// A single protocol event.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Event {
    /// An operation began.
    Start(Value),
    /// Bytes moved during a download.
    Progress {
        current: u64,
        total: u64,
        percentage: f64,
    },
    /// The operation finished successfully. Terminal.
    Complete(Value),
    /// The operation failed. Terminal; the process exits non-zero after.
    Error {
        message: String,
        code: Option<String>,
    },
}

impl Event {
    /// A `start` event with an operation-specific payload.
    pub fn start(data: Value) -> Self {
        Self::Start(data)
    }

    /// A `progress` event; percentage is 0 when the total is unknown.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(current: u64, total: u64) -> Self {
        let percentage = if total > 0 {
            current as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self::Progress {
            current,
            total,
            percentage,
        }
    }

    /// A `complete` event with an operation-specific payload.
    pub fn complete(data: Value) -> Self {
        Self::Complete(data)
    }

    /// An `error` event carrying a message and a stable code string.
    pub fn error(message: impl Into<String>, code: Option<String>) -> Self {
        Self::Error {
            message: message.into(),
            code,
        }
    }

    /// The `error` event for a hub operation failure.
    pub fn failure(err: &HubError) -> Self {
        Self::error(err.to_string(), Some(err.code().to_string()))
    }
}

/// Writes events as JSON lines, flushing after each one so the consumer
/// sees them as they happen.
pub struct Emitter<W: Write> {
    writer: W,
}

impl<W: Write> Emitter<W> {
    /// Wrap a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize and write one event followed by a newline, then flush.
    pub fn emit(&mut self, event: &Event) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, event).map_err(io::Error::other)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Consume the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// An emitter over the process's standard output.
pub fn stdout() -> Emitter<io::Stdout> {
    Emitter::new(io::stdout())
}
