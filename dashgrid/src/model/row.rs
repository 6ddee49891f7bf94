//! Dynamic grid row

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Value;
use crate::error::GridError;

/// Field that carries row identity.
pub const ID_FIELD: &str = "id";

/// Fields consulted, in order, for a row's human-readable name.
const DISPLAY_NAME_FIELDS: [&str; 3] = ["name", "title", "label"];

/// One record in the grid.
///
/// Rows hold an identity plus an open `field -> Value` mapping. The `id` is
/// kept out of the field map so it cannot be edited through [`Row::set`];
/// [`Row::get`] still answers for `"id"`.
///
/// On the wire a row is a flat JSON object with a string (or numeric) `id`.
///
/// # Example
///
/// ```
/// use dashgrid::model::Row;
///
/// let row = Row::new("1")
///     .with("name", "Alice")
///     .with("salary", "5000");
///
/// assert_eq!(row.id(), "1");
/// assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: String,
    fields: HashMap<String, Value>,
    /// Cached `Value::Text(id)` so `get("id")` can hand out a reference.
    id_value: Value,
}

impl Row {
    /// Creates an empty row with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            id_value: Value::Text(id.clone()),
            id,
            fields: HashMap::new(),
        }
    }

    /// Returns the row id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        if field == ID_FIELD {
            return Some(&self.id_value);
        }
        self.fields.get(field)
    }

    /// Returns the field value, treating missing fields as null.
    pub fn value(&self, field: &str) -> &Value {
        const NULL: &Value = &Value::Null;
        self.get(field).unwrap_or(NULL)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        field == ID_FIELD || self.fields.contains_key(field)
    }

    /// Returns a reference to all non-id fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Sets a field value (builder pattern).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field value. Writes to `id` are ignored.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        if field == ID_FIELD {
            log::warn!("Ignoring write to '{}' on row {}", ID_FIELD, self.id);
            return;
        }
        self.fields.insert(field, value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Human-readable name used by delete confirmations.
    ///
    /// Uses the first non-blank of `name`, `title`, `label`; falls back to
    /// the id.
    pub fn display_name(&self) -> String {
        DISPLAY_NAME_FIELDS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|v| !v.is_blank())
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.id.clone())
    }

    /// Builds a row from a JSON object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Builds rows from a JSON array of objects.
///
/// Reports the index of the first element without an `id`.
pub fn rows_from_json(value: serde_json::Value) -> crate::error::Result<Vec<Row>> {
    let items: Vec<serde_json::Value> = serde_json::from_value(value)?;
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if item.get(ID_FIELD).is_none_or(serde_json::Value::is_null) {
                return Err(GridError::MissingId { index });
            }
            Ok(Row::from_json(item)?)
        })
        .collect()
}

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(ID_FIELD, &self.id)?;

        // Sorted keys keep exported documents diffable
        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();
        for key in keys {
            map.serialize_entry(key, &self.fields[key])?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with an 'id' field")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Row, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut id: Option<String> = None;
        let mut fields = HashMap::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: Value = map.next_value()?;
            if key == ID_FIELD {
                id = match value {
                    Value::Text(s) => Some(s),
                    Value::Number(_) => Some(value.to_string()),
                    other => {
                        return Err(M::Error::custom(format!(
                            "'id' must be a string or number, got {}",
                            other.type_name()
                        )));
                    }
                };
            } else {
                fields.insert(key, value);
            }
        }

        let id = id.ok_or_else(|| M::Error::missing_field(ID_FIELD))?;
        let mut row = Row::new(id);
        row.fields = fields;
        Ok(row)
    }
}
