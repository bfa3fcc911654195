//! Session record input: what a reporter hands over for one test session.

use gt_gherkin::GherkinDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;

use crate::error::Result;

/// One test session as submitted to the reporter.
///
/// Carries the capability descriptor exactly as the driver supplied it
/// (resolution happens at summary time, so unrecognized shapes still load)
/// plus the parsed feature document when the runner is a BDD toolchain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Raw capability descriptor. A missing field deserializes as JSON
    /// null, which resolves to full fallback tags downstream.
    #[serde(default)]
    pub capabilities: Value,

    /// Parsed document for the executed feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gherkin_document: Option<GherkinDocument>,
}

impl SessionRecord {
    /// Parse a record from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse a record from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
