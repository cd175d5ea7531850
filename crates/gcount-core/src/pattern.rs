//! Regex-driven counting
//!
//! A cluster is "one non-mark followed by any marks, or failing that any one
//! code point". Matching that pattern left to right without overlap and
//! counting the matches gives the same answer as [`count_by_scan`] when both
//! run on the same mark data.
//!
//! [`count_by_scan`]: crate::scan::count_by_scan

use crate::error::Result;
use crate::table::MarkTable;
use regex::Regex;
use std::sync::OnceLock;

/// Cluster pattern over the regex engine's bundled Unicode tables
///
/// `(?s)` lets `.` take newlines too, so a leading mark run is always
/// consumed one code point at a time and every input is fully covered.
pub const MARK_CLUSTER_PATTERN: &str = r"(?s)\P{M}\p{M}*|.";

/// Compiled cluster pattern, cheap to share between threads
#[derive(Debug, Clone)]
pub struct PatternCounter {
    regex: Regex,
}

impl PatternCounter {
    /// The process-wide counter for [`MARK_CLUSTER_PATTERN`], compiled once
    pub fn builtin() -> &'static PatternCounter {
        static BUILTIN: OnceLock<PatternCounter> = OnceLock::new();
        BUILTIN.get_or_init(compile_builtin)
    }

    /// Compile a cluster pattern whose notion of "mark" is exactly `table`
    pub fn from_table(table: &MarkTable) -> Result<Self> {
        let pattern = Self::pattern_for_table(table);
        log::debug!(
            "Compiling cluster pattern for table '{}' ({} ranges, {} bytes)",
            table.source(),
            table.len(),
            pattern.len()
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Pattern source text for `table`
    pub fn pattern_for_table(table: &MarkTable) -> String {
        if table.is_empty() {
            // No marks: every code point is its own cluster.
            return "(?s).".to_string();
        }
        let class = table.to_regex_class();
        format!("(?s)[^{class}][{class}]*|.")
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// The matched clusters themselves, in order
    pub fn clusters<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.find_iter(text).map(|m| m.as_str())
    }
}

// Fixed pattern, known to compile.
#[allow(clippy::expect_used)]
fn compile_builtin() -> PatternCounter {
    log::debug!("Compiling builtin cluster pattern {MARK_CLUSTER_PATTERN:?}");
    PatternCounter {
        regex: Regex::new(MARK_CLUSTER_PATTERN).expect("valid cluster pattern"),
    }
}

/// Count clusters with the built-in pattern
pub fn count_by_pattern(text: &str) -> usize {
    PatternCounter::builtin().count(text)
}
