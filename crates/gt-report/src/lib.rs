//! Report text processing for grid tags.
//!
//! Takes a session record (raw capability descriptor plus optional Gherkin
//! document) and produces rendered summaries:
//! - JSON via serde for machine consumption
//! - Plain text lines for terminals
//! - An escaped HTML fragment for report embedding
//!
//! Capability resolution itself lives in gt-caps; this crate owns the
//! record input format, the summary view, and the text/HTML rendering
//! including escaping.

pub mod error;
pub mod escape;
pub mod record;
pub mod summary;

pub use error::{ReportError, Result};
pub use escape::html_escape;
pub use record::SessionRecord;
pub use summary::{tag_badges, SessionSummary, SummaryOptions};
