//! Fuzz target for XML document loading.
//!
//! Goal: decoding and parsing should **never panic** on any input.
//! They may report a load failure, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_xml_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes exercise UTF-8 and BOM handling.
    let _ = intlxml_repo::fuzz::load_bytes(data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = intlxml_repo::fuzz::parse_xml(text);
    }
});
