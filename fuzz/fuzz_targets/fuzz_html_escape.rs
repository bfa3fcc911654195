//! Fuzz target for HTML escaping.
//!
//! Escaped output must never contain a character that could open a tag,
//! attribute, or entity context, whatever the input bytes were.

#![no_main]

use gt_report::html_escape;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let escaped = html_escape(&input);
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert!(!escaped.contains('"'));
    assert!(!escaped.contains('\''));
});
