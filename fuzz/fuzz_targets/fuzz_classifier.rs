//! Fuzz target for the legality classifier.
//!
//! Goal: classification terminates without panicking on any string and is deterministic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_classifier
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let first = intlxml_domain::is_legal(text);
    assert_eq!(first, intlxml_domain::is_legal(text));

    if !text.chars().any(|c| c.is_ascii_alphabetic()) {
        assert!(first);
    }
});
