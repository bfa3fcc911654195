//! Tag construction: the public entry point of the crate.

use gt_model::{Tag, TagSet};
use serde_json::Value;
use tracing::debug;

use crate::dialect::CapabilityView;
use crate::fields::{
    Precedence, BROWSER_NAME, BROWSER_VERSION, FALLBACK_NAME, PLATFORM_NAME, PLATFORM_VERSION,
};

/// Resolve the canonical tag pair for one capability descriptor.
///
/// Total: any JSON value yields a pair, degrading to the `"unknown"` name
/// and absent version when fields are missing or malformed. Output order is
/// fixed: browser first, then platform.
pub fn tags_for(capability: &Value) -> [Tag; 2] {
    let view = CapabilityView::classify(capability);
    let fields = view.fields();

    let browser_name = resolve_name(&BROWSER_NAME, fields);
    let browser_version = BROWSER_VERSION.resolve(fields);
    let platform_name = resolve_name(&PLATFORM_NAME, fields);
    let platform_version = PLATFORM_VERSION.resolve(fields);

    [
        Tag::browser(browser_name, browser_version),
        Tag::platform(platform_name, platform_version),
    ]
}

/// Resolve tags into the serialized report set.
pub fn tag_set_for(capability: &Value) -> TagSet {
    let [browser, platform] = tags_for(capability);
    TagSet::new(browser, platform)
}

/// Name attributes fall back to a literal; version attributes stay absent.
fn resolve_name(table: &Precedence, fields: &Value) -> String {
    match table.resolve(fields) {
        Some(name) => name,
        None => {
            debug!(
                attribute = table.attribute,
                "no candidate field present, using fallback name"
            );
            FALLBACK_NAME.to_string()
        }
    }
}
