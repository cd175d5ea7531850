//! gcount core: counting what a reader sees as characters
//!
//! A grapheme cluster here is one base code point plus any combining marks
//! that follow it. Marks with no base before them count on their own. This is
//! a deliberate approximation of UAX #29: no emoji sequences, no regional
//! indicators, no Hangul syllable rules, no normalization.
//!
//! ## Two ways to count
//!
//! - [`scan::count_by_scan`] walks the code points once with a single flag
//! - [`pattern::PatternCounter`] counts matches of `\P{M}\p{M}*|.`
//!
//! Both answer the same for any input as long as they read the same mark data,
//! which is why [`GraphemeCounter`] builds them from one source.
//!
//! ## Where mark data comes from
//!
//! Classification is injected through [`MarkClassifier`]. This crate ships the
//! regex engine's bundled tables ([`BuiltinMarkClassifier`]) and pinned,
//! serialisable [`MarkTable`]s; `gcount-unicode` adds ICU data.
//!
//! ```
//! use gcount_core::{GraphemeCounter, MarkTable, Strategy};
//!
//! let counter = GraphemeCounter::builtin();
//! assert_eq!(counter.count("a\u{301}b\u{301}c\u{301}"), 3);
//!
//! let pinned = MarkTable::new("combining-diacriticals", [(0x300, 0x36F)])?;
//! let counter = GraphemeCounter::from_table(pinned)?.with_strategy(Strategy::Pattern);
//! assert_eq!(counter.count("\u{301}x"), 2);
//! # Ok::<(), gcount_core::GcountError>(())
//! ```

pub mod classify;
pub mod counter;
pub mod error;
pub mod pattern;
pub mod scan;
pub mod table;

pub use classify::{BuiltinMarkClassifier, CodePointClass, FnClassifier, MarkClassifier};
pub use counter::{GraphemeCounter, Strategy};
pub use error::{GcountError, Result};
pub use pattern::{count_by_pattern, PatternCounter, MARK_CLUSTER_PATTERN};
pub use scan::count_by_scan;
pub use table::MarkTable;
