//! Immutable Gherkin document node model.
//!
//! Data-only types matching the classic Gherkin AST shape (camelCase keys,
//! `type` discriminators on polymorphic positions) as produced by BDD
//! toolchains. Report renderers consume these nodes as opaque data; nothing
//! here parses feature text or executes steps.
//!
//! Unknown JSON keys are ignored on deserialization, so documents from
//! newer toolchain versions still load as long as the core layout holds.

pub mod document;
pub mod scenario;
pub mod table;

pub use document::{Comment, Feature, GherkinDocument, GherkinTag, Location};
pub use scenario::{Background, Examples, Scenario, ScenarioDefinition, ScenarioOutline, Step};
pub use table::{DataTable, DocString, StepArgument, TableCell, TableRow};
