//! Form field specs.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::GridError;
use crate::error::Result;
use crate::model::Row;
use crate::model::SelectOption;
use crate::model::Strategy;
use crate::model::Value;

/// Input control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Textarea,
    Email,
    Select,
    Multiselect,
    Checkbox,
    Radio,
    File,
    Currency,
    Percentage,
    Number,
    Readonly,
}

impl InputType {
    /// Inputs whose values are numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            InputType::Number | InputType::Currency | InputType::Percentage
        )
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Visibility predicate over the record being edited.
pub trait FieldCondition: Send + Sync {
    fn evaluate(&self, record: &Row) -> bool;
}

impl<F> FieldCondition for F
where
    F: Fn(&Row) -> bool + Send + Sync,
{
    fn evaluate(&self, record: &Row) -> bool {
        self(record)
    }
}

/// Rewrites a value as it is entered.
pub trait ValueTransform: Send + Sync {
    fn apply(&self, value: Value) -> Value;
}

impl<F> ValueTransform for F
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn apply(&self, value: Value) -> Value {
        self(value)
    }
}

/// Extra validation; `Some(message)` marks the field invalid.
pub trait CustomValidator: Send + Sync {
    fn check(&self, value: &Value, record: &Row) -> Option<String>;
}

impl<F> CustomValidator for F
where
    F: Fn(&Value, &Row) -> Option<String> + Send + Sync,
{
    fn check(&self, value: &Value, record: &Row) -> Option<String> {
        self(value, record)
    }
}

/// When a field is shown.
///
/// The declarative variants serialize; `Custom` exists only in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "camelCase")]
pub enum Condition {
    /// Another field loosely equals a value.
    Equals { key: String, value: Value },
    /// Another field is filled in.
    NotBlank { key: String },
    #[serde(skip)]
    Custom(Strategy<dyn FieldCondition>),
}

impl Condition {
    pub fn equals(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Equals {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn not_blank(key: impl Into<String>) -> Self {
        Condition::NotBlank { key: key.into() }
    }

    pub fn custom(condition: impl FieldCondition + 'static) -> Self {
        let condition: Arc<dyn FieldCondition> = Arc::new(condition);
        Condition::Custom(Strategy::from_arc(condition))
    }

    pub fn evaluate(&self, record: &Row) -> bool {
        match self {
            Condition::Equals { key, value } => record.value(key).loose_eq(value),
            Condition::NotBlank { key } => !record.value(key).is_blank(),
            Condition::Custom(condition) => condition.evaluate(record),
        }
    }
}

/// How an entered value is rewritten before it is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    Trim,
    Lowercase,
    Uppercase,
    #[serde(skip)]
    Custom(Strategy<dyn ValueTransform>),
}

impl Transform {
    pub fn custom(transform: impl ValueTransform + 'static) -> Self {
        let transform: Arc<dyn ValueTransform> = Arc::new(transform);
        Transform::Custom(Strategy::from_arc(transform))
    }

    pub fn apply(&self, value: Value) -> Value {
        match (self, value) {
            (Transform::Trim, Value::Text(s)) => Value::Text(s.trim().to_string()),
            (Transform::Lowercase, Value::Text(s)) => Value::Text(s.to_lowercase()),
            (Transform::Uppercase, Value::Text(s)) => Value::Text(s.to_uppercase()),
            (Transform::Custom(transform), value) => transform.apply(value),
            (_, value) => value,
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// A compiled regex that (de)serializes as its source string.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Regex::new(&source)
            .map(Pattern)
            .map_err(serde::de::Error::custom)
    }
}

/// Validation rules for one field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldRules {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    #[serde(skip)]
    pub custom: Option<Strategy<dyn CustomValidator>>,
}

// =============================================================================
// Field spec
// =============================================================================

/// One editable field of the edit form.
///
/// # Example
///
/// ```
/// use dashgrid::form::{Condition, FormFieldSpec, InputType};
///
/// let fields = vec![
///     FormFieldSpec::new("email", "Email", InputType::Email).required(),
///     FormFieldSpec::new("age", "Age", InputType::Number).min(18.0).max(120.0),
///     FormFieldSpec::new("reason", "Reason", InputType::Textarea)
///         .visible_when(Condition::equals("status", "inactive"))
///         .max_length(200),
/// ];
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldSpec {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub input: InputType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "validation")]
    pub rules: FieldRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    /// Grid placement hint: columns spanned in the form layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u8>,
    /// Key of the section this field is grouped under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Choices for select, multiselect and radio inputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FormFieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, input: InputType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            input,
            required: false,
            rules: FieldRules::default(),
            visible_when: None,
            transform: None,
            col_span: None,
            section: None,
            placeholder: None,
            help_text: None,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.rules.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.rules.max = Some(max);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.rules.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.rules.max_length = Some(len);
        self
    }

    /// Requires the value to match a regex.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| GridError::invalid_pattern(self.key.clone(), e))?;
        self.rules.pattern = Some(Pattern(regex));
        Ok(self)
    }

    pub fn validate_with(mut self, validator: impl CustomValidator + 'static) -> Self {
        let validator: Arc<dyn CustomValidator> = Arc::new(validator);
        self.rules.custom = Some(Strategy::from_arc(validator));
        self
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = Some(condition);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn col_span(mut self, span: u8) -> Self {
        self.col_span = Some(span);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Whether the field is shown for this record.
    pub fn is_visible(&self, record: &Row) -> bool {
        self.visible_when
            .as_ref()
            .is_none_or(|condition| condition.evaluate(record))
    }
}

impl fmt::Display for FormFieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.key)
    }
}
