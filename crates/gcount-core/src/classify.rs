//! The seam between counting and Unicode data
//!
//! Counting only ever asks one question of a code point: is it a combining
//! mark (general category Mn, Mc or Me)? [`MarkClassifier`] answers it, so the
//! same counting code runs against ICU data, the regex engine's own tables or
//! a pinned [`MarkTable`](crate::table::MarkTable) loaded from disk.

use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Mark/Base verdict for a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePointClass {
    /// Anything that is not a combining mark
    Base,
    /// General category Mn, Mc or Me
    Mark,
}

/// Answers "is this code point a combining mark?"
///
/// ```
/// use gcount_core::classify::{CodePointClass, FnClassifier, MarkClassifier};
///
/// let accents = FnClassifier::new(|ch| ('\u{300}'..='\u{36F}').contains(&ch));
/// assert!(accents.is_mark('\u{301}'));
/// assert_eq!(accents.classify('e'), CodePointClass::Base);
/// ```
pub trait MarkClassifier: Send + Sync {
    /// Short label used in logs and CLI output
    fn name(&self) -> &str;

    /// True when `ch` belongs to the Mark general category group
    fn is_mark(&self, ch: char) -> bool;

    fn classify(&self, ch: char) -> CodePointClass {
        if self.is_mark(ch) {
            CodePointClass::Mark
        } else {
            CodePointClass::Base
        }
    }
}

impl<C: MarkClassifier + ?Sized> MarkClassifier for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_mark(&self, ch: char) -> bool {
        (**self).is_mark(ch)
    }
}

impl<C: MarkClassifier + ?Sized> MarkClassifier for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_mark(&self, ch: char) -> bool {
        (**self).is_mark(ch)
    }
}

impl<C: MarkClassifier + ?Sized> MarkClassifier for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_mark(&self, ch: char) -> bool {
        (**self).is_mark(ch)
    }
}

/// Wraps a plain predicate so it can stand in for a real table
pub struct FnClassifier<F> {
    predicate: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> MarkClassifier for FnClassifier<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        "fn"
    }

    fn is_mark(&self, ch: char) -> bool {
        (self.predicate)(ch)
    }
}

/// Classifier backed by the regex engine's bundled Unicode tables
///
/// Pairs with the built-in `\P{M}\p{M}*|.` pattern: both consult the same
/// data, so the two counting strategies cannot drift apart when this is the
/// classifier in use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMarkClassifier;

const SINGLE_MARK_PATTERN: &str = r"\A\p{M}\z";

fn single_mark_regex() -> &'static Regex {
    static SINGLE_MARK: OnceLock<Regex> = OnceLock::new();
    SINGLE_MARK.get_or_init(compile_single_mark)
}

// Fixed pattern, known to compile.
#[allow(clippy::expect_used)]
fn compile_single_mark() -> Regex {
    Regex::new(SINGLE_MARK_PATTERN).expect("valid mark pattern")
}

impl BuiltinMarkClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl MarkClassifier for BuiltinMarkClassifier {
    fn name(&self) -> &str {
        "builtin"
    }

    fn is_mark(&self, ch: char) -> bool {
        if ch.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        single_mark_regex().is_match(ch.encode_utf8(&mut buf))
    }
}
