//! Document-level nodes: locations, comments, tags, the feature, and the
//! document root.

use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioDefinition;

/// Position of a node in the source feature file (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// A source comment, kept verbatim including the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Source position of the comment.
    pub location: Location,

    /// Comment text as written.
    pub text: String,
}

/// An `@tag` annotation on a feature, scenario, or examples table.
///
/// Distinct from the report-side identity tags; this is the Gherkin source
/// annotation, name included with its `@` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GherkinTag {
    /// Source position of the tag.
    pub location: Location,

    /// Tag name including the `@` prefix.
    pub name: String,
}

/// The feature node: language header, annotations, and child definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Tags annotating the feature.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<GherkinTag>,

    /// Source position of the `Feature:` keyword.
    pub location: Location,

    /// Spoken language code the file was written in (`"en"`, `"fr"`, ...).
    pub language: String,

    /// Localized keyword as written (`"Feature"`, `"Fonctionnalité"`, ...).
    pub keyword: String,

    /// Feature title, possibly empty.
    pub name: String,

    /// Free-form description block under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Backgrounds, scenarios, and scenario outlines in source order.
    #[serde(default)]
    pub children: Vec<ScenarioDefinition>,
}

/// Root node of a parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GherkinDocument {
    /// The feature, absent for an empty or comment-only file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,

    /// All comments in the file, regardless of position.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl GherkinDocument {
    /// Title of the feature, when the document has one.
    pub fn feature_name(&self) -> Option<&str> {
        self.feature.as_ref().map(|feature| feature.name.as_str())
    }

    /// Names of all scenarios and scenario outlines, in source order.
    /// Backgrounds are setup, not runnable scenarios, and are excluded.
    pub fn scenario_names(&self) -> Vec<&str> {
        let Some(feature) = &self.feature else {
            return Vec::new();
        };
        feature
            .children
            .iter()
            .filter(|child| !matches!(child, ScenarioDefinition::Background(_)))
            .map(|child| child.name())
            .collect()
    }
}
