//! Filter specs and active filter state.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Sentinel select value meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Predicate family applied by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterType {
    #[default]
    Select,
    Date,
    DateRange,
    Number,
    Text,
}

/// One choice offered by a select filter or form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: Value,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Filter configuration.
///
/// # Example
///
/// ```
/// use dashgrid::model::{SelectOption, FilterSpec, FilterType};
///
/// let status = FilterSpec::new("status", "Status", FilterType::Select)
///     .option(SelectOption::new("active", "Active"))
///     .option(SelectOption::new("inactive", "Inactive"))
///     .multiple();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Row field the filter constrains.
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FilterType,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Allows several select values at once (matched with OR).
    #[serde(default)]
    pub multiple: bool,
}

impl FilterSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FilterType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            multiple: false,
        }
    }

    /// Adds a select option.
    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Allows multiple selected values.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }
}

/// The current value of one filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    /// No constraint.
    #[default]
    All,
    /// A scalar: select choice, date, number or text.
    Single(Value),
    /// Several select choices.
    Multiple(Vec<Value>),
    /// Inclusive date range; a missing bound disables the constraint.
    Range {
        start: Option<Value>,
        end: Option<Value>,
    },
}

impl FilterValue {
    /// Creates an inclusive range with both bounds set.
    pub fn range(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        FilterValue::Range {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Returns `true` if this value constrains nothing.
    ///
    /// Covers [`FilterValue::All`], null/blank scalars, the `"all"`
    /// sentinel and empty multi-selections.
    pub fn is_unconstrained(&self) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Single(v) => v.is_blank() || v.as_str() == Some(ALL_SENTINEL),
            FilterValue::Multiple(values) => values.is_empty(),
            FilterValue::Range { .. } => false,
        }
    }
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        FilterValue::Single(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Single(Value::from(v))
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Single(Value::from(v))
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Single(Value::from(v))
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Single(Value::from(v))
    }
}

/// Mapping from filter key to its current value.
///
/// Keys are kept ordered so pipeline runs are deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActiveFilters {
    values: BTreeMap<String, FilterValue>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter value (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a filter value. Setting [`FilterValue::All`] removes the entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        match value.into() {
            FilterValue::All => {
                self.values.remove(&key);
            }
            value => {
                self.values.insert(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Entries that actually constrain rows.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_unconstrained())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Number of constraining entries, for "N filters active" badges.
    pub fn active_count(&self) -> usize {
        self.constraints().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}
