//! Availability check.

use std::io::Write;

use serde_json::json;

use crate::events::{Emitter, Event};

/// Report that the hub client is present.
///
/// The client library is linked into this binary, so availability is
/// unconditional and the check never fails: one `complete` event, exit 0.
pub fn execute<W: Write>(emitter: &mut Emitter<W>) -> anyhow::Result<()> {
    emitter.emit(&Event::complete(json!({
        "available": true,
        "version": hublink_hub::CLIENT_VERSION,
    })))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_check_emits_single_complete() {
        let mut emitter = Emitter::new(Vec::new());
        execute(&mut emitter).unwrap();

        let out = String::from_utf8(emitter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);

        let event: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["type"], "complete");
        assert_eq!(event["data"]["available"], true);
        assert!(event["data"]["version"].is_string());
    }
}
