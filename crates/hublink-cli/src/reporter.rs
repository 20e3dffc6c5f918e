//! Rate-limited progress event reporting.
//!
//! [`EventReporter`] lives only for the duration of a single blocking
//! download call. It accumulates per-file totals (a snapshot reports every
//! file through the same reporter) and emits `progress` events no more
//! often than the throttle interval allows.

use std::io::Write;

use hublink_hub::{ProgressSink, ProgressThrottle};
use tracing::{debug, warn};

use crate::events::{Emitter, Event};

/// Forwards download progress to the event emitter, rate-limited.
pub struct EventReporter<'a, W: Write> {
    emitter: &'a mut Emitter<W>,
    throttle: ProgressThrottle,
    current: u64,
    total: u64,
}

impl<'a, W: Write> EventReporter<'a, W> {
    /// Reporter with the default 500ms emission interval.
    pub fn new(emitter: &'a mut Emitter<W>) -> Self {
        Self::with_throttle(emitter, ProgressThrottle::default_interval())
    }

    /// Reporter with a custom throttle.
    pub fn with_throttle(emitter: &'a mut Emitter<W>, throttle: ProgressThrottle) -> Self {
        Self {
            emitter,
            throttle,
            current: 0,
            total: 0,
        }
    }

    fn emit_progress(&mut self) {
        if !self.throttle.should_emit() {
            return;
        }
        // Progress is a best-effort side channel; a failed write must not
        // abort the download itself.
        if let Err(err) = self.emitter.emit(&Event::progress(self.current, self.total)) {
            warn!(error = %err, "failed to emit progress event");
        }
    }
}

impl<W: Write> ProgressSink for EventReporter<'_, W> {
    fn begin(&mut self, total: u64, filename: &str) {
        debug!(filename, total, "transfer starting");
        self.total += total;
    }

    fn advance(&mut self, delta: u64) {
        self.current += delta;
        self.emit_progress();
    }

    fn complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::time::Duration;

    fn progress_lines(emitter: Emitter<Vec<u8>>) -> Vec<Value> {
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        out.lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_unthrottled_emits_every_advance() {
        let mut emitter = Emitter::new(Vec::new());
        {
            let mut reporter =
                EventReporter::with_throttle(&mut emitter, ProgressThrottle::new(Duration::ZERO));
            reporter.begin(100, "a.bin");
            reporter.advance(40);
            reporter.advance(60);
            reporter.complete();
        }

        let lines = progress_lines(emitter);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["data"]["current"], 100);
        assert_eq!(lines[1]["data"]["total"], 100);
    }

    #[test]
    fn test_totals_accumulate_across_files() {
        let mut emitter = Emitter::new(Vec::new());
        {
            let mut reporter =
                EventReporter::with_throttle(&mut emitter, ProgressThrottle::new(Duration::ZERO));
            reporter.begin(10, "a.bin");
            reporter.advance(10);
            reporter.complete();
            reporter.begin(30, "b.bin");
            reporter.advance(30);
            reporter.complete();
        }

        let lines = progress_lines(emitter);
        let last = lines.last().unwrap();
        assert_eq!(last["data"]["current"], 40);
        assert_eq!(last["data"]["total"], 40);
    }

    #[test]
    fn test_throttle_suppresses_flood() {
        let mut emitter = Emitter::new(Vec::new());
        {
            let mut reporter = EventReporter::with_throttle(
                &mut emitter,
                ProgressThrottle::new(Duration::from_secs(60)),
            );
            reporter.begin(1000, "a.bin");
            for _ in 0..100 {
                reporter.advance(10);
            }
        }

        // Only the first advance passes the throttle
        assert_eq!(progress_lines(emitter).len(), 1);
    }
}
