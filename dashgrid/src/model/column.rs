//! Column specs for grid display.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::Row;
use super::Strategy;
use super::Value;

/// Semantic type of a column, driving formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Currency,
    Percentage,
    Date,
    Datetime,
    Checkbox,
    Select,
    Multiselect,
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Custom cell renderer.
///
/// Implemented for any `Fn(&Value, &Row) -> String`.
pub trait CellRenderer: Send + Sync {
    fn render(&self, value: &Value, row: &Row) -> String;
}

impl<F> CellRenderer for F
where
    F: Fn(&Value, &Row) -> String + Send + Sync,
{
    fn render(&self, value: &Value, row: &Row) -> String {
        self(value, row)
    }
}

/// Column configuration.
///
/// Columns name the field they display, how it is formatted, and whether
/// it takes part in sorting and search.
///
/// # Examples
///
/// ```
/// use dashgrid::model::{Alignment, ColumnSpec, ColumnType};
///
/// let columns = vec![
///     ColumnSpec::new("name", "Name"),
///     ColumnSpec::new("salary", "Salary")
///         .kind(ColumnType::Currency)
///         .align(Alignment::Right),
///     ColumnSpec::new("notes", "Notes").not_sortable().not_searchable(),
/// ];
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Row field this column reads.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Semantic type.
    #[serde(default, rename = "type")]
    pub kind: ColumnType,
    /// Whether clicking the header sorts by this column.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the search box matches against this column.
    #[serde(default = "default_true")]
    pub searchable: bool,
    #[serde(default)]
    pub align: Alignment,
    /// Width hint, passed through to the host (`"120px"`, `"20%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip)]
    pub renderer: Option<Strategy<dyn CellRenderer>>,
}

fn default_true() -> bool {
    true
}

impl ColumnSpec {
    /// Creates a sortable, searchable text column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ColumnType::Text,
            sortable: true,
            searchable: true,
            align: Alignment::Left,
            width: None,
            renderer: None,
        }
    }

    /// Sets the semantic type.
    pub fn kind(mut self, kind: ColumnType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Sets the width hint.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Excludes the column from sorting.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Excludes the column from search.
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Renders cells through a custom renderer instead of the formatter.
    pub fn render_with(mut self, renderer: impl CellRenderer + 'static) -> Self {
        let renderer: Arc<dyn CellRenderer> = Arc::new(renderer);
        self.renderer = Some(Strategy::from_arc(renderer));
        self
    }
}
