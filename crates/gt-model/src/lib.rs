//! Grid Tags shared report model.
//!
//! This crate provides the report-side types shared across gt crates:
//! - Canonical identity tags (browser/platform) and their serialized set
//! - Output format specifications
//! - The delayed-callback contract used by polling call sites

pub mod callback;
pub mod output;
pub mod tag;

pub use callback::{CallbackStats, DelayedCallback};
pub use output::OutputFormat;
pub use tag::{Tag, TagKind, TagSet, TAG_SCHEMA_VERSION};
