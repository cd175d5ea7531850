//! Single-pass counting over code points

use crate::classify::MarkClassifier;

/// Count base+marks clusters in one linear pass
///
/// Every base starts a new cluster. A mark joins the cluster in progress,
/// except before the first base, where there is nothing to join and each mark
/// stands alone.
pub fn count_by_scan<C: MarkClassifier + ?Sized>(text: &str, classifier: &C) -> usize {
    let mut seen_base = false;
    let mut count = 0;

    for ch in text.chars() {
        if !classifier.is_mark(ch) {
            count += 1;
            seen_base = true;
        } else if !seen_base {
            count += 1;
        }
    }

    count
}
