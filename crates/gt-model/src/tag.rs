//! Canonical identity tags for test-run reporting.
//!
//! Every test execution is labeled with exactly two tags: which browser ran
//! it and which platform it ran on. Tags are pure output values produced by
//! capability resolution and consumed by report renderers and grouping
//! logic; two tags with equal kind, name, and version are the same tag.
//!
//! # Versioning
//!
//! Serialized tag sets carry a schema version (see [`TAG_SCHEMA_VERSION`])
//! so downstream consumers can detect layout changes across report
//! generations.

use serde::{Deserialize, Serialize};

/// Schema version for serialized tag sets.
pub const TAG_SCHEMA_VERSION: &str = "1.0.0";

/// Which attribute family a tag labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// What ran the test: a browser, or a mobile app under test.
    Browser,
    /// Where the test ran: an operating system or device platform.
    Platform,
}

impl TagKind {
    /// Get both kinds in report order (browser first, then platform).
    pub fn all() -> &'static [TagKind] {
        &[TagKind::Browser, TagKind::Platform]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            TagKind::Browser => "browser",
            TagKind::Platform => "platform",
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A canonical identity tag attached to a test execution.
///
/// Equal by fields; the pair never carries identity beyond (kind, name,
/// version). `name` is never empty: resolution substitutes the literal
/// `"unknown"` when no known field yields one. `version` stays `None` when
/// no version was resolved, which is distinct from a version string of
/// `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Which attribute family this tag labels.
    pub kind: TagKind,

    /// Human-readable identity: `"chrome"`, `"Windows"`, `"unknown"`.
    pub name: String,

    /// Version string, when one was resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Tag {
    /// Construct a browser tag from a resolved (name, version) pair.
    pub fn browser(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            kind: TagKind::Browser,
            name: name.into(),
            version,
        }
    }

    /// Construct a platform tag from a resolved (name, version) pair.
    pub fn platform(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            kind: TagKind::Platform,
            name: name.into(),
            version,
        }
    }

    /// Space-joined display form: `"chrome 118"`, or just `"chrome"` when
    /// no version is known (no trailing space).
    pub fn full_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{} {}", self.name, version),
            None => self.name.clone(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// The serialized pair of tags for one test execution, in fixed report
/// order: browser first, then platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    /// Tag schema version for reproducibility tracking.
    pub schema_version: String,

    /// What ran the test.
    pub browser: Tag,

    /// Where the test ran.
    pub platform: Tag,
}

impl TagSet {
    /// Build a tag set, stamping the current schema version.
    pub fn new(browser: Tag, platform: Tag) -> Self {
        Self {
            schema_version: TAG_SCHEMA_VERSION.to_string(),
            browser,
            platform,
        }
    }

    /// Tags in report order.
    pub fn as_array(&self) -> [&Tag; 2] {
        [&self.browser, &self.platform]
    }
}
