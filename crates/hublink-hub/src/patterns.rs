//! Glob-based include/exclude filtering for snapshot downloads.

use glob::{Pattern, PatternError};

/// Compiled allow/ignore pattern lists applied to repo-relative filenames.
///
/// Semantics match the wrapped library's snapshot filters: when allow
/// patterns are present a file must match at least one of them; ignore
/// patterns then subtract from that selection. With no patterns at all
/// every file is included.
#[derive(Debug, Default)]
pub struct PatternSet {
    allow: Vec<Pattern>,
    ignore: Vec<Pattern>,
}

impl PatternSet {
    /// Compile allow/ignore pattern strings, preserving their order.
    pub fn compile(
        allow: Option<&[String]>,
        ignore: Option<&[String]>,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            allow: compile_list(allow)?,
            ignore: compile_list(ignore)?,
        })
    }

    /// Whether `rfilename` survives the allow/ignore filters.
    pub fn matches(&self, rfilename: &str) -> bool {
        if !self.allow.is_empty() && !self.allow.iter().any(|p| p.matches(rfilename)) {
            return false;
        }
        !self.ignore.iter().any(|p| p.matches(rfilename))
    }
}

fn compile_list(patterns: Option<&[String]>) -> Result<Vec<Pattern>, PatternError> {
    patterns
        .unwrap_or_default()
        .iter()
        .map(|p| Pattern::new(p))
        .collect()
}
