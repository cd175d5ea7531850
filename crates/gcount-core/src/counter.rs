//! The counting facade: one classifier, one compiled pattern, two strategies

use crate::classify::{BuiltinMarkClassifier, MarkClassifier};
use crate::error::{GcountError, Result};
use crate::pattern::PatternCounter;
use crate::scan::count_by_scan;
use crate::table::MarkTable;
use std::fmt;
use std::str::FromStr;

/// Which algorithm answers a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One pass over the code points with a "seen a base yet" flag
    #[default]
    Scan,
    /// Non-overlapping matches of the cluster pattern
    Pattern,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Scan, Strategy::Pattern];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Scan => "scan",
            Strategy::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = GcountError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scan" => Ok(Strategy::Scan),
            "pattern" | "regex" => Ok(Strategy::Pattern),
            other => Err(GcountError::Other(format!(
                "Unknown strategy '{other}' (expected scan or pattern)"
            ))),
        }
    }
}

/// Counts base+marks grapheme clusters
///
/// The classifier drives the scan strategy and the compiled pattern drives
/// the pattern strategy. Constructors that derive both from one data source
/// ([`GraphemeCounter::builtin`], [`GraphemeCounter::from_table`]) guarantee
/// the two strategies agree on every input.
///
/// ```
/// use gcount_core::{GraphemeCounter, Strategy};
///
/// let counter = GraphemeCounter::builtin();
/// assert_eq!(counter.count("cafe\u{301}"), 4);
/// assert_eq!(counter.count_with("\u{301}x", Strategy::Pattern), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GraphemeCounter<C> {
    classifier: C,
    pattern: PatternCounter,
    strategy: Strategy,
}

impl GraphemeCounter<BuiltinMarkClassifier> {
    /// Counter over the regex engine's bundled Unicode tables
    pub fn builtin() -> Self {
        Self::new(BuiltinMarkClassifier::new(), PatternCounter::builtin().clone())
    }
}

impl GraphemeCounter<MarkTable> {
    /// Counter whose both strategies read from `table`
    pub fn from_table(table: MarkTable) -> Result<Self> {
        let pattern = PatternCounter::from_table(&table)?;
        Ok(Self::new(table, pattern))
    }
}

impl<C: MarkClassifier> GraphemeCounter<C> {
    /// Pair a classifier with a pattern
    ///
    /// The two should describe the same mark set; otherwise the strategies
    /// can disagree and [`GraphemeCounter::verify`] will report it.
    pub fn new(classifier: C, pattern: PatternCounter) -> Self {
        Self {
            classifier,
            pattern,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn pattern(&self) -> &PatternCounter {
        &self.pattern
    }

    /// Count clusters with the configured strategy
    pub fn count(&self, text: &str) -> usize {
        self.count_with(text, self.strategy)
    }

    pub fn count_with(&self, text: &str, strategy: Strategy) -> usize {
        match strategy {
            Strategy::Scan => count_by_scan(text, &self.classifier),
            Strategy::Pattern => self.pattern.count(text),
        }
    }

    /// Decode UTF-8 and count
    ///
    /// Malformed input is rejected rather than repaired.
    pub fn count_bytes(&self, bytes: &[u8]) -> Result<usize> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.count(text))
    }

    /// Run both strategies and insist they agree
    pub fn verify(&self, text: &str) -> Result<usize> {
        let scan = self.count_with(text, Strategy::Scan);
        let pattern = self.count_with(text, Strategy::Pattern);
        if scan != pattern {
            log::warn!(
                "Strategy mismatch with classifier '{}': scan={scan}, pattern={pattern}",
                self.classifier.name()
            );
            return Err(GcountError::StrategyMismatch { scan, pattern });
        }
        Ok(scan)
    }

    /// The clusters matched by the pattern strategy
    pub fn clusters<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern.clusters(text)
    }

    /// Count many independent strings, preserving order
    #[cfg(feature = "parallel")]
    pub fn count_all<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<usize> {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.count(text.as_ref())).collect()
    }

    /// Count many independent strings, preserving order
    #[cfg(not(feature = "parallel"))]
    pub fn count_all<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<usize> {
        texts.iter().map(|text| self.count(text.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::FnClassifier;

    const REFERENCE_CASES: &[(&str, usize)] = &[
        ("", 0),
        ("hello", 5),
        ("e\u{301}", 1),
        ("a\u{301}b\u{301}c\u{301}", 3),
        ("\u{301}x", 2),
        ("\u{301}\u{302}\u{303}x", 4),
        ("x\u{301}\u{302}\u{303}\u{304}", 1),
        ("\u{915}\u{93F}\u{20DD}", 1),
    ];

    #[test]
    fn both_strategies_match_reference_cases() {
        let counter = GraphemeCounter::builtin();
        for &(text, expected) in REFERENCE_CASES {
            for strategy in Strategy::ALL {
                assert_eq!(counter.count_with(text, strategy), expected, "{text:?} via {strategy}");
            }
            assert_eq!(counter.verify(text).unwrap(), expected);
        }
    }

    #[test]
    fn configured_strategy_is_used() {
        let counter = GraphemeCounter::builtin().with_strategy(Strategy::Pattern);
        assert_eq!(counter.strategy(), Strategy::Pattern);
        assert_eq!(counter.count("e\u{301}"), 1);
        assert_eq!(GraphemeCounter::builtin().strategy(), Strategy::Scan);
    }

    #[test]
    fn strategy_parses_and_displays() {
        assert_eq!("scan".parse::<Strategy>().unwrap(), Strategy::Scan);
        assert_eq!("Pattern".parse::<Strategy>().unwrap(), Strategy::Pattern);
        assert_eq!("regex".parse::<Strategy>().unwrap(), Strategy::Pattern);
        assert!("fast".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Pattern.to_string(), "pattern");
    }

    #[test]
    fn count_bytes_decodes_utf8() {
        let counter = GraphemeCounter::builtin();
        assert_eq!(counter.count_bytes("e\u{301}t\u{e9}".as_bytes()).unwrap(), 3);
        assert_eq!(counter.count_bytes(b"").unwrap(), 0);
    }

    #[test]
    fn count_bytes_reports_first_invalid_byte() {
        let counter = GraphemeCounter::builtin();
        let err = counter.count_bytes(b"ab\xFFcd").unwrap_err();
        assert!(matches!(err, GcountError::InvalidEncoding { valid_up_to: 2 }));

        // Truncated multi-byte sequence
        let err = counter.count_bytes(b"e\xCC").unwrap_err();
        assert!(matches!(err, GcountError::InvalidEncoding { valid_up_to: 1 }));
    }

    #[test]
    fn table_counter_agrees_with_itself() {
        let table = MarkTable::new("tilde", [('~' as u32, '~' as u32)]).unwrap();
        let counter = GraphemeCounter::from_table(table).unwrap();
        for text in ["", "~", "~~a", "a~~b~", "e\u{301}"] {
            counter.verify(text).unwrap();
        }
        assert_eq!(counter.count("a~~b~"), 2);
    }

    #[test]
    fn mismatched_pairing_is_reported() {
        let counter = GraphemeCounter::new(
            FnClassifier::new(|ch| ch == '~'),
            PatternCounter::builtin().clone(),
        );
        let err = counter.verify("a~").unwrap_err();
        assert!(matches!(
            err,
            GcountError::StrategyMismatch {
                scan: 1,
                pattern: 2
            }
        ));
        assert_eq!(counter.verify("abc").unwrap(), 3);
    }

    #[test]
    fn clusters_match_count() {
        let counter = GraphemeCounter::builtin();
        let text = "\u{301}na\u{303}o";
        let clusters: Vec<&str> = counter.clusters(text).collect();
        assert_eq!(clusters, vec!["\u{301}", "n", "a\u{303}", "o"]);
        assert_eq!(clusters.len(), counter.count(text));
    }

    #[test]
    fn count_all_preserves_order() {
        let counter = GraphemeCounter::builtin();
        let texts = vec!["hello".to_string(), String::new(), "e\u{301}".to_string()];
        assert_eq!(counter.count_all(&texts), vec![5, 0, 1]);
    }
}
