//! Table and doc-string nodes: the two step argument shapes.

use serde::{Deserialize, Serialize};

use crate::document::Location;

/// A single cell of a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Source position of the cell.
    pub location: Location,

    /// Cell text, possibly empty.
    pub value: String,
}

/// One row of a data table or examples table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Source position of the row.
    pub location: Location,

    /// Cells in column order.
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Cell texts in column order.
    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.value.as_str()).collect()
    }
}

/// A data table attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTable {
    /// Source position of the table.
    pub location: Location,

    /// Rows in source order, header included.
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

impl DataTable {
    /// Cell texts row by row.
    pub fn row_values(&self) -> Vec<Vec<&str>> {
        self.rows.iter().map(TableRow::values).collect()
    }
}

/// A doc string attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocString {
    /// Source position of the doc string.
    pub location: Location,

    /// Declared media type, when the author gave one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Literal content between the delimiters.
    pub content: String,
}

/// The argument attached to a step, discriminated by the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StepArgument {
    DataTable(DataTable),
    DocString(DocString),
}
