//! HTML escaping for report text.

/// Escape HTML special characters in report text.
///
/// Ampersand first, so substituted entities are not escaped again. The
/// apostrophe maps to `&apos;`, the entity set the downstream report
/// pipeline expects.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
