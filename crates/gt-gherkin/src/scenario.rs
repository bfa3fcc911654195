//! Scenario-level nodes: steps, backgrounds, scenarios, and outlines.

use serde::{Deserialize, Serialize};

use crate::document::{GherkinTag, Location};
use crate::table::StepArgument;

/// A single step (`Given`/`When`/`Then` line) with its optional argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub location: Location,

    /// Localized keyword as written, trailing space included (`"Given "`).
    pub keyword: String,

    /// Step text after the keyword.
    pub text: String,

    /// Attached data table or doc string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<StepArgument>,
}

/// Setup steps shared by every scenario in the feature. Carries no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub location: Location,
    pub keyword: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A concrete scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<GherkinTag>,
    pub location: Location,
    pub keyword: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// An examples table parameterizing a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Examples {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<GherkinTag>,
    pub location: Location,
    pub keyword: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Column header row; absent when the table is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_header: Option<crate::table::TableRow>,

    /// Value rows under the header.
    #[serde(default)]
    pub table_body: Vec<crate::table::TableRow>,
}

/// A templated scenario expanded per examples row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutline {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<GherkinTag>,
    pub location: Location,
    pub keyword: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub examples: Vec<Examples>,
}

/// A feature child, discriminated by the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScenarioDefinition {
    Background(Background),
    Scenario(Scenario),
    ScenarioOutline(ScenarioOutline),
}

impl ScenarioDefinition {
    /// The definition's name, possibly empty (backgrounds often are).
    pub fn name(&self) -> &str {
        match self {
            ScenarioDefinition::Background(background) => &background.name,
            ScenarioDefinition::Scenario(scenario) => &scenario.name,
            ScenarioDefinition::ScenarioOutline(outline) => &outline.name,
        }
    }

    /// Localized keyword as written.
    pub fn keyword(&self) -> &str {
        match self {
            ScenarioDefinition::Background(background) => &background.keyword,
            ScenarioDefinition::Scenario(scenario) => &scenario.keyword,
            ScenarioDefinition::ScenarioOutline(outline) => &outline.keyword,
        }
    }

    /// Steps in source order.
    pub fn steps(&self) -> &[Step] {
        match self {
            ScenarioDefinition::Background(background) => &background.steps,
            ScenarioDefinition::Scenario(scenario) => &scenario.steps,
            ScenarioDefinition::ScenarioOutline(outline) => &outline.steps,
        }
    }

    /// Tags annotating the definition. Backgrounds cannot carry tags.
    pub fn tags(&self) -> &[GherkinTag] {
        match self {
            ScenarioDefinition::Background(_) => &[],
            ScenarioDefinition::Scenario(scenario) => &scenario.tags,
            ScenarioDefinition::ScenarioOutline(outline) => &outline.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location { line: 10, column: 3 }
    }

    #[test]
    fn test_definition_discriminated_by_type() {
        let json = r#"{
            "type": "ScenarioOutline",
            "tags": [{"location": {"line": 9, "column": 3}, "name": "@slow"}],
            "location": {"line": 10, "column": 3},
            "keyword": "Scenario Outline",
            "name": "Pay <method>",
            "steps": [],
            "examples": []
        }"#;
        let definition: ScenarioDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.name(), "Pay <method>");
        assert_eq!(definition.keyword(), "Scenario Outline");
        assert_eq!(definition.tags()[0].name, "@slow");
    }

    #[test]
    fn test_background_has_no_tags() {
        let definition = ScenarioDefinition::Background(Background {
            location: location(),
            keyword: "Background".to_string(),
            name: String::new(),
            description: None,
            steps: Vec::new(),
        });
        assert!(definition.tags().is_empty());
        assert_eq!(definition.name(), "");
    }

    #[test]
    fn test_steps_accessor_covers_variants() {
        let step = Step {
            location: location(),
            keyword: "Given ".to_string(),
            text: "a cart".to_string(),
            argument: None,
        };
        let definition = ScenarioDefinition::Scenario(Scenario {
            tags: Vec::new(),
            location: location(),
            keyword: "Scenario".to_string(),
            name: "Pay by card".to_string(),
            description: None,
            steps: vec![step],
        });
        assert_eq!(definition.steps().len(), 1);
        assert_eq!(definition.steps()[0].text, "a cart");
    }

    #[test]
    fn test_examples_table_keys_are_camel_case() {
        let json = r#"{
            "tags": [],
            "location": {"line": 14, "column": 5},
            "keyword": "Examples",
            "name": "",
            "tableHeader": {
                "location": {"line": 15, "column": 7},
                "cells": [{"location": {"line": 15, "column": 9}, "value": "method"}]
            },
            "tableBody": [
                {
                    "location": {"line": 16, "column": 7},
                    "cells": [{"location": {"line": 16, "column": 9}, "value": "visa"}]
                }
            ]
        }"#;
        let examples: Examples = serde_json::from_str(json).unwrap();
        assert_eq!(examples.table_header.unwrap().values(), vec!["method"]);
        assert_eq!(examples.table_body[0].values(), vec!["visa"]);
    }

    #[test]
    fn test_scenario_roundtrip_preserves_structure() {
        let scenario = Scenario {
            tags: vec![GherkinTag {
                location: location(),
                name: "@smoke".to_string(),
            }],
            location: location(),
            keyword: "Scenario".to_string(),
            name: "Pay by card".to_string(),
            description: Some("Paying with a stored card.".to_string()),
            steps: Vec::new(),
        };
        let json = serde_json::to_string(&scenario).unwrap();
        let parsed: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, parsed);
    }
}
