// this_file: crates/gcount-unicode/src/lib.rs

//! ICU-backed mark classification shared by the gcount CLI and callers.

use gcount_core::{count_by_scan, GraphemeCounter, MarkClassifier, MarkTable, Result};
use icu_properties::{props::GeneralCategory, CodePointMapData, CodePointMapDataBorrowed};
use std::sync::OnceLock;

/// Classifier over ICU4X's compiled general category data
#[derive(Debug, Clone, Copy)]
pub struct IcuMarkClassifier {
    general_category: CodePointMapDataBorrowed<'static, GeneralCategory>,
}

impl IcuMarkClassifier {
    /// Create a classifier with ICU data baked in.
    pub fn new() -> Self {
        Self {
            general_category: CodePointMapData::<GeneralCategory>::new(),
        }
    }

    pub fn general_category(&self, ch: char) -> GeneralCategory {
        self.general_category.get(ch)
    }
}

impl Default for IcuMarkClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkClassifier for IcuMarkClassifier {
    fn name(&self) -> &str {
        "icu_properties"
    }

    fn is_mark(&self, ch: char) -> bool {
        matches!(
            self.general_category(ch),
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
        )
    }
}

/// ICU's mark set as a [`MarkTable`], computed once per process
pub fn icu_mark_table() -> &'static MarkTable {
    static TABLE: OnceLock<MarkTable> = OnceLock::new();
    TABLE.get_or_init(|| MarkTable::from_classifier(&IcuMarkClassifier::new()))
}

/// A fresh counter whose scan and pattern strategies both read ICU data
pub fn icu_counter() -> Result<GraphemeCounter<IcuMarkClassifier>> {
    let table = icu_mark_table();
    let pattern = gcount_core::PatternCounter::from_table(table)?;
    log::debug!("Built ICU counter over {} mark ranges", table.len());
    Ok(GraphemeCounter::new(IcuMarkClassifier::new(), pattern))
}

/// The process-wide ICU counter, built on first use
pub fn shared_counter() -> Result<&'static GraphemeCounter<IcuMarkClassifier>> {
    static COUNTER: OnceLock<std::result::Result<GraphemeCounter<IcuMarkClassifier>, String>> =
        OnceLock::new();

    COUNTER
        .get_or_init(|| icu_counter().map_err(|err| err.to_string()))
        .as_ref()
        .map_err(|msg| gcount_core::GcountError::Other(msg.clone()))
}

/// Count base+marks grapheme clusters using ICU data
///
/// ```
/// assert_eq!(gcount_unicode::grapheme_count("a\u{301}b\u{301}c\u{301}"), 3);
/// assert_eq!(gcount_unicode::grapheme_count("\u{301}x"), 2);
/// ```
pub fn grapheme_count(text: &str) -> usize {
    count_by_scan(text, &IcuMarkClassifier::new())
}


#[cfg(test)]
mod proptests;
