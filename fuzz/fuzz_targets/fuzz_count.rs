//! Throw arbitrary bytes at both counting strategies
//!
//! Malformed UTF-8 must come back as an error, never a panic. Well-formed
//! text must get the same count from the scan and pattern strategies, under
//! both the regex engine's tables and ICU's.

#![no_main]

use gcount_core::{GcountError, GraphemeCounter, Strategy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Keep single runs fast
    if data.len() > 10_000 {
        return;
    }

    let builtin = GraphemeCounter::builtin();
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => {
            assert!(matches!(
                builtin.count_bytes(data),
                Err(GcountError::InvalidEncoding { .. })
            ));
            return;
        },
    };

    let scan = builtin.count_with(text, Strategy::Scan);
    assert_eq!(scan, builtin.count_with(text, Strategy::Pattern));
    assert!(scan <= text.chars().count());

    if let Ok(icu) = gcount_unicode::shared_counter() {
        assert_eq!(
            icu.count_with(text, Strategy::Scan),
            icu.count_with(text, Strategy::Pattern)
        );
    }
});
