//! Fuzz target for capability tag resolution.
//!
//! Resolution is total: any JSON value that parses must produce a browser
//! and a platform tag with non-empty names, without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(capability) = serde_json::from_slice::<serde_json::Value>(data) {
        let tags = gt_caps::tags_for(&capability);
        assert!(!tags[0].name.is_empty());
        assert!(!tags[1].name.is_empty());
    }
});
