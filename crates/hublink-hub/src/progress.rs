//! Progress reporting abstraction and rate limiting.
//!
//! [`ProgressSink`] decouples download progress from any specific output
//! format: the CLI adapter forwards updates as JSON events, tests collect
//! them into vectors. [`ProgressThrottle`] rate-limits emissions so a fast
//! transfer cannot flood the consumer.

use std::time::{Duration, Instant};

/// Receives byte-level progress during a blocking download call.
///
/// For snapshot downloads [`begin`](Self::begin) is invoked once per file;
/// implementations that want aggregate progress accumulate the totals.
pub trait ProgressSink {
    /// A file transfer is starting; `total` is its size in bytes.
    fn begin(&mut self, total: u64, filename: &str);

    /// `delta` more bytes have been transferred.
    fn advance(&mut self, delta: u64);

    /// The current file finished transferring.
    fn complete(&mut self);
}

/// A sink that ignores all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn begin(&mut self, _total: u64, _filename: &str) {}
    fn advance(&mut self, _delta: u64) {}
    fn complete(&mut self) {}
}

/// Rate-limiter for progress updates.
///
/// Ensures progress events are not emitted more frequently than the
/// configured interval. The first check always passes.
pub struct ProgressThrottle {
    last_emit: Option<Instant>,
    min_interval: Duration,
}

impl ProgressThrottle {
    /// Create a new throttle with the specified minimum interval.
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_emit: None,
            min_interval,
        }
    }

    /// Create a throttle with the default interval of 500ms.
    pub const fn default_interval() -> Self {
        Self::new(Duration::from_millis(500))
    }

    /// Check if enough time has passed to emit another progress update.
    pub fn should_emit(&mut self) -> bool {
        let now = Instant::now();
        match self.last_emit {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_emit = Some(now);
                true
            }
        }
    }

    /// Force the next check to return true.
    pub const fn reset(&mut self) {
        self.last_emit = None;
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::default_interval()
    }
}
