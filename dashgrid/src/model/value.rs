//! Value enum for dynamic field values

use std::fmt;

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held by a row field.
///
/// Rows are schema-less, so every cell is one of these variants. The
/// semantic meaning (currency, percentage, date...) comes from the column or
/// form field that reads it, not from the value itself.
///
/// # Type Mapping
///
/// | JSON            | Rust Variant |
/// |-----------------|--------------|
/// | null            | `Null`       |
/// | true / false    | `Bool`       |
/// | number          | `Number`     |
/// | string          | `Text`       |
/// | array           | `List`       |
///
/// `Date` and `DateTime` are never produced by deserialization: JSON dates
/// arrive as `Text` and are parsed on demand by the formatter and filters.
///
/// # Example
///
/// ```
/// use dashgrid::model::Value;
///
/// let name = Value::from("Alice");
/// let salary = Value::from(5000);
/// let tags = Value::from(vec!["admin", "ops"]);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// String value.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time without timezone.
    DateTime(NaiveDateTime),
    /// Array of values (tags, multiselect fields).
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
        }
    }

    /// Returns the inner string for `Text` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner number for `Number` values.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements of a `List` value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` for null, whitespace-only text and empty lists.
    ///
    /// `false` and `0` are not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Interprets the value as a checkbox state.
    ///
    /// Text is truthy only for `true`, `yes`, `on` and `1` (any case).
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "on" | "1"
            ),
            Value::Date(_) | Value::DateTime(_) => true,
            Value::List(items) => !items.is_empty(),
        }
    }

    /// Equality used by select filters.
    ///
    /// Same-typed values compare directly; mixed types fall back to comparing
    /// their string forms, so `Number(1)` matches `Text("1")`.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

/// Renders a number the way a dynamic language would: integers without a
/// fractional part, everything else in shortest form.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// The plain string form of a value, used for sorting and text filters.
///
/// Null renders as the empty string; lists join with `,`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&number_to_string(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
