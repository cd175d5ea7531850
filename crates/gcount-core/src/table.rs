//! Versioned mark tables
//!
//! A [`MarkTable`] pins down exactly which code points count as marks. It can
//! be snapshotted from any [`MarkClassifier`], written to JSON, loaded back
//! later, and rendered as a regex character class for the pattern strategy.
//! Upgrading Unicode data then becomes an explicit diff between two files.

use crate::classify::MarkClassifier;
use crate::error::{GcountError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Write as _;

const MAX_SCALAR: u32 = char::MAX as u32;

/// Sorted, non-overlapping inclusive ranges of mark code points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableFile", into = "TableFile")]
pub struct MarkTable {
    source: String,
    unicode_version: Option<String>,
    ranges: Vec<(u32, u32)>,
}

/// On-disk shape of a table, validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableFile {
    source: String,
    #[serde(default)]
    unicode_version: Option<String>,
    ranges: Vec<(u32, u32)>,
}

impl TryFrom<TableFile> for MarkTable {
    type Error = GcountError;

    fn try_from(file: TableFile) -> Result<Self> {
        let mut table = MarkTable::new(file.source, file.ranges)?;
        table.unicode_version = file.unicode_version;
        Ok(table)
    }
}

impl From<MarkTable> for TableFile {
    fn from(table: MarkTable) -> Self {
        TableFile {
            source: table.source,
            unicode_version: table.unicode_version,
            ranges: table.ranges,
        }
    }
}

impl MarkTable {
    /// Build a table from raw ranges, merging overlaps and adjacent runs
    ///
    /// Every endpoint must be a Unicode scalar value and no range may be
    /// reversed.
    pub fn new(source: impl Into<String>, ranges: impl IntoIterator<Item = (u32, u32)>) -> Result<Self> {
        let mut ranges: Vec<(u32, u32)> = ranges.into_iter().collect();

        for &(start, end) in &ranges {
            if start > end {
                return Err(GcountError::InvalidTable(format!(
                    "reversed range U+{start:04X}..U+{end:04X}"
                )));
            }
            for endpoint in [start, end] {
                if char::from_u32(endpoint).is_none() {
                    return Err(GcountError::InvalidTable(format!(
                        "U+{endpoint:04X} is not a Unicode scalar value"
                    )));
                }
            }
        }

        ranges.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            match merged.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(end);
                },
                _ => merged.push((start, end)),
            }
        }

        Ok(Self {
            source: source.into(),
            unicode_version: None,
            ranges: merged,
        })
    }

    /// Table with no marks at all: every code point is a base
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            unicode_version: None,
            ranges: Vec::new(),
        }
    }

    /// Record which Unicode version the ranges were taken from
    pub fn with_unicode_version(mut self, version: impl Into<String>) -> Self {
        self.unicode_version = Some(version.into());
        self
    }

    /// Snapshot a classifier by asking it about every scalar value
    pub fn from_classifier<C: MarkClassifier + ?Sized>(classifier: &C) -> Self {
        let mut ranges = Vec::new();
        let mut run: Option<(u32, u32)> = None;

        for ch in (0..=MAX_SCALAR).filter_map(char::from_u32) {
            let cp = ch as u32;
            if classifier.is_mark(ch) {
                run = match run {
                    Some((start, _)) => Some((start, cp)),
                    None => Some((cp, cp)),
                };
            } else if let Some(finished) = run.take() {
                ranges.push(finished);
            }
        }
        if let Some(finished) = run {
            ranges.push(finished);
        }

        log::debug!(
            "Snapshotted '{}' classifier into {} mark ranges",
            classifier.name(),
            ranges.len()
        );

        Self {
            source: classifier.name().to_string(),
            unicode_version: None,
            ranges,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn unicode_version(&self) -> Option<&str> {
        self.unicode_version.as_deref()
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    /// Number of ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < cp {
                    Ordering::Less
                } else if start > cp {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Body of a regex character class matching exactly the table's marks
    ///
    /// Returns an empty string for an empty table, which is not a valid class
    /// body on its own; callers must handle that case.
    pub fn to_regex_class(&self) -> String {
        let mut class = String::with_capacity(self.ranges.len() * 20);
        for &(start, end) in &self.ranges {
            // Writing into a String cannot fail.
            let _ = if start == end {
                write!(class, "\\x{{{start:X}}}")
            } else {
                write!(class, "\\x{{{start:X}}}-\\x{{{end:X}}}")
            };
        }
        class
    }
}

impl MarkClassifier for MarkTable {
    fn name(&self) -> &str {
        &self.source
    }

    fn is_mark(&self, ch: char) -> bool {
        self.contains(ch)
    }
}
