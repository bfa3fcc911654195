//! Ordered field-precedence tables for capability attributes.
//!
//! Different protocol generations and grid vendors populate different
//! fields for the same attribute, and one descriptor can carry several of
//! them at once. Each report attribute therefore has an ordered candidate
//! list, scanned first-match-wins. The ordering is load-bearing: it decides
//! which dialect's field wins when both are present, and it must not be
//! reshuffled.
//!
//! A value counts as present only if it is a non-empty string (after prefix
//! removal for `app`). Empty strings, numbers, and other JSON shapes fall
//! through to the next candidate.

use serde_json::Value;

/// Name fallback when no candidate field resolves.
pub const FALLBACK_NAME: &str = "unknown";

/// Prefix a cloud grid prepends to uploaded app identifiers.
pub const SAUCE_STORAGE_PREFIX: &str = "sauce-storage:";

/// One candidate field in a precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKey {
    /// Capability key to look up.
    pub key: &'static str,

    /// Exact prefix stripped from a matched value before use.
    pub strip_prefix: Option<&'static str>,
}

impl FieldKey {
    /// A candidate whose value is used verbatim.
    pub const fn plain(key: &'static str) -> Self {
        Self {
            key,
            strip_prefix: None,
        }
    }

    /// A candidate with an exact prefix removed when present.
    pub const fn stripped(key: &'static str, prefix: &'static str) -> Self {
        Self {
            key,
            strip_prefix: Some(prefix),
        }
    }

    /// Resolve this candidate against a field mapping.
    fn lookup(&self, fields: &Value) -> Option<String> {
        let value = fields.get(self.key)?.as_str()?;
        let value = match self.strip_prefix {
            // Starts-with then slice; a substring replace could clip the
            // prefix text out of the middle of a value.
            Some(prefix) => value.strip_prefix(prefix).unwrap_or(value),
            None => value,
        };
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }
}

/// An ordered precedence table for one report attribute.
#[derive(Debug, Clone, Copy)]
pub struct Precedence {
    /// Attribute name for diagnostics.
    pub attribute: &'static str,

    /// Candidate keys, scanned in order.
    pub candidates: &'static [FieldKey],
}

impl Precedence {
    /// Scan the candidates in order and return the first present value.
    pub fn resolve(&self, fields: &Value) -> Option<String> {
        self.candidates
            .iter()
            .find_map(|candidate| candidate.lookup(fields))
    }
}

/// Browser name: W3C first, then legacy, then cloud-grid app uploads.
pub const BROWSER_NAME: Precedence = Precedence {
    attribute: "browser name",
    candidates: &[
        FieldKey::plain("browserName"),
        FieldKey::plain("browser"),
        FieldKey::stripped("app", SAUCE_STORAGE_PREFIX),
    ],
};

/// Browser version: the device name doubles as the version slot on mobile.
pub const BROWSER_VERSION: Precedence = Precedence {
    attribute: "browser version",
    candidates: &[
        FieldKey::plain("deviceName"),
        FieldKey::plain("browserVersion"),
        FieldKey::plain("version"),
        FieldKey::plain("browser_version"),
    ],
};

/// Platform name across W3C, legacy, and vendor layouts.
pub const PLATFORM_NAME: Precedence = Precedence {
    attribute: "platform name",
    candidates: &[
        FieldKey::plain("platformName"),
        FieldKey::plain("platform"),
        FieldKey::plain("os"),
    ],
};

/// Platform version across W3C and vendor layouts.
pub const PLATFORM_VERSION: Precedence = Precedence {
    attribute: "platform version",
    candidates: &[
        FieldKey::plain("platformVersion"),
        FieldKey::plain("os_version"),
    ],
};
