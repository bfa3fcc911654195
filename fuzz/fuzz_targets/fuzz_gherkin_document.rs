//! Fuzz target for Gherkin document deserialization.
//!
//! Documents may come from third-party runner plugins; parsing arbitrary
//! input must fail with an error rather than panic.

#![no_main]

use gt_gherkin::GherkinDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<GherkinDocument>(data);
});
