//! Grid documents and command-line filter parsing.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::bail;
use dashgrid::Grid;
use dashgrid::config::TableConfig;
use dashgrid::config::TableOptions;
use dashgrid::model::ColumnSpec;
use dashgrid::model::FilterSpec;
use dashgrid::model::FilterType;
use dashgrid::model::FilterValue;
use dashgrid::model::Row;
use dashgrid::model::Value;
use dashgrid::model::rows_from_json;
use serde::Deserialize;

/// A grid document as stored on disk.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// Kept raw so a missing id can be reported by index.
    pub rows: serde_json::Value,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    #[serde(default)]
    pub table: TableOptions,
}

impl Document {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid grid document {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the grid. Without declared columns every field becomes a
    /// text column, in key order.
    pub fn into_grid(self, config: TableConfig) -> anyhow::Result<Grid> {
        let rows = rows_from_json(self.rows)?;
        let columns = if self.columns.is_empty() {
            infer_columns(&rows)
        } else {
            self.columns
        };
        log::info!("Loaded {} rows, {} columns", rows.len(), columns.len());

        let grid = Grid::new(columns)
            .with_config(config)
            .with_filters(self.filters)
            .with_rows(rows)?;
        Ok(grid)
    }
}

fn infer_columns(rows: &[Row]) -> Vec<ColumnSpec> {
    let keys: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.fields().keys().map(String::as_str))
        .collect();
    keys.into_iter().map(|key| ColumnSpec::new(key, key)).collect()
}

/// Parses a `KEY=VALUE` argument into a filter value shaped for its spec.
pub fn parse_filter(raw: &str, specs: &[FilterSpec]) -> anyhow::Result<(String, FilterValue)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Filter '{}' is not KEY=VALUE", raw))?;
    let key = key.trim();

    let value = match specs.iter().find(|s| s.key == key) {
        Some(spec) if spec.kind == FilterType::DateRange => match value.split_once("..") {
            Some((start, end)) => FilterValue::range(start.trim(), end.trim()),
            None => bail!("Date range filter '{}' needs START..END", key),
        },
        Some(spec) if spec.multiple => FilterValue::Multiple(
            value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(Value::from)
                .collect(),
        ),
        Some(_) => FilterValue::from(value),
        None => {
            log::warn!("No filter declared for '{}', it will be ignored", key);
            FilterValue::from(value)
        }
    };
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "rows": [
            {"id": 1, "name": "Alice", "dept": "eng"},
            {"id": 2, "name": "Bob", "team": "ops"}
        ],
        "filters": [
            {"key": "dept", "label": "Department", "type": "select", "multiple": true},
            {"key": "hired", "label": "Hired", "type": "date-range"}
        ],
        "table": {"itemsPerPage": 1, "title": "Staff"}
    }"#;

    #[test]
    fn test_document_infers_columns() {
        let document = Document::parse(DOC).unwrap();
        let config = document.table.clone().resolve();
        assert_eq!(config.items_per_page, 1);

        let grid = document.into_grid(config).unwrap();
        let keys: Vec<&str> = grid.columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["dept", "name", "team"]);
        assert_eq!(grid.total_pages(), 2);
    }

    #[test]
    fn test_missing_id_is_reported() {
        let document = Document::parse(r#"{"rows": [{"id": "a"}, {"name": "x"}]}"#).unwrap();
        let err = document.into_grid(TableConfig::default()).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_parse_filter_shapes() {
        let specs = Document::parse(DOC).unwrap().filters;

        let (key, value) = parse_filter("dept=eng, ops", &specs).unwrap();
        assert_eq!(key, "dept");
        assert_eq!(
            value,
            FilterValue::Multiple(vec![Value::from("eng"), Value::from("ops")])
        );

        let (_, value) = parse_filter("hired=2024-01-01..2024-12-31", &specs).unwrap();
        assert_eq!(value, FilterValue::range("2024-01-01", "2024-12-31"));

        assert!(parse_filter("hired=2024-01-01", &specs).is_err());
        assert!(parse_filter("nonsense", &specs).is_err());
    }
}
