//! Record validation against field specs.

use crate::format::coerce_number;
use crate::model::Row;
use crate::model::Value;
use crate::model::number_to_string;

use super::FieldError;
use super::FormFieldSpec;
use super::InputType;
use super::ValidationResult;

/// Validates a record against a field list.
///
/// Hidden and readonly fields are skipped. Each remaining field reports
/// every rule it breaks, in check order; [`ValidationResult::error_map`]
/// keeps the first per field.
///
/// # Example
///
/// ```
/// use dashgrid::form::{validate, FormFieldSpec, InputType};
/// use dashgrid::model::Row;
///
/// let fields = vec![FormFieldSpec::new("email", "Email", InputType::Email).required()];
/// let result = validate(&fields, &Row::new("1"));
///
/// assert_eq!(result.message_for("email"), Some("Email is required"));
/// ```
pub fn validate(fields: &[FormFieldSpec], record: &Row) -> ValidationResult {
    let mut errors = Vec::new();
    for field in fields {
        if field.input == InputType::Readonly || !field.is_visible(record) {
            continue;
        }
        for message in validate_field(field, record) {
            errors.push(FieldError::new(field.key.clone(), message));
        }
    }
    ValidationResult::from_errors(errors)
}

/// Messages for one field, empty when it is valid.
pub fn validate_field(field: &FormFieldSpec, record: &Row) -> Vec<String> {
    let value = record.value(&field.key);
    let label = &field.label;
    let rules = &field.rules;

    let missing = match field.input {
        InputType::Checkbox => !value.is_truthy(),
        _ => value.is_blank(),
    };
    if missing {
        return if field.required {
            vec![format!("{} is required", label)]
        } else {
            Vec::new()
        };
    }

    let mut messages = Vec::new();

    if let Value::Text(text) = value {
        let len = text.chars().count();
        if let Some(min) = rules.min_length
            && len < min
        {
            messages.push(format!("{} must be at least {} characters", label, min));
        }
        if let Some(max) = rules.max_length
            && len > max
        {
            messages.push(format!("{} must be at most {} characters", label, max));
        }
    }

    if let Some(pattern) = &rules.pattern
        && !matches!(value, Value::List(_))
        && !pattern.is_match(&value.to_string())
    {
        messages.push(format!("{} format is invalid", label));
    }

    if field.input == InputType::Email
        && !email_address::EmailAddress::is_valid(value.to_string().trim())
    {
        messages.push(format!("{} must be a valid email address", label));
    }

    match coerce_number(value) {
        Some(n) => {
            if let Some(min) = rules.min
                && n < min
            {
                messages.push(format!("{} must be at least {}", label, number_to_string(min)));
            }
            if let Some(max) = rules.max
                && n > max
            {
                messages.push(format!("{} must be at most {}", label, number_to_string(max)));
            }
        }
        None if field.input.is_numeric() => {
            messages.push(format!("{} must be a number", label));
        }
        None => {}
    }

    if let Some(custom) = &rules.custom
        && let Some(message) = custom.check(value, record)
        && !message.is_empty()
    {
        messages.push(message);
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Condition;

    #[test]
    fn test_required_short_circuits() {
        let field = FormFieldSpec::new("name", "Name", InputType::Text)
            .required()
            .min_length(3);
        let messages = validate_field(&field, &Row::new("1").with("name", "   "));
        assert_eq!(messages, vec!["Name is required"]);
    }

    #[test]
    fn test_optional_empty_skips_rules() {
        let field = FormFieldSpec::new("code", "Code", InputType::Text)
            .min_length(3)
            .validate_with(|_: &Value, _: &Row| Some("never".to_string()));
        assert!(validate_field(&field, &Row::new("1")).is_empty());
    }

    #[test]
    fn test_length_and_pattern() {
        let field = FormFieldSpec::new("zip", "Zip", InputType::Text)
            .min_length(5)
            .pattern(r"^\d+$")
            .unwrap();
        let messages = validate_field(&field, &Row::new("1").with("zip", "12a"));
        assert_eq!(
            messages,
            vec!["Zip must be at least 5 characters", "Zip format is invalid"]
        );
    }

    #[test]
    fn test_numeric_bounds() {
        let field = FormFieldSpec::new("age", "Age", InputType::Number)
            .min(18.0)
            .max(65.0);
        assert_eq!(
            validate_field(&field, &Row::new("1").with("age", 12)),
            vec!["Age must be at least 18"]
        );
        assert_eq!(
            validate_field(&field, &Row::new("1").with("age", "70")),
            vec!["Age must be at most 65"]
        );
        assert_eq!(
            validate_field(&field, &Row::new("1").with("age", "old")),
            vec!["Age must be a number"]
        );
    }

    #[test]
    fn test_email_input() {
        let field = FormFieldSpec::new("email", "Email", InputType::Email);
        assert!(validate_field(&field, &Row::new("1").with("email", "a@b.co")).is_empty());
        assert_eq!(
            validate_field(&field, &Row::new("1").with("email", "nope")),
            vec!["Email must be a valid email address"]
        );
    }

    #[test]
    fn test_custom_runs_alongside_builtins() {
        let field = FormFieldSpec::new("handle", "Handle", InputType::Text)
            .max_length(3)
            .validate_with(|v: &Value, _: &Row| {
                (v.as_str() == Some("root")).then(|| "Handle is reserved".to_string())
            });
        assert_eq!(
            validate_field(&field, &Row::new("1").with("handle", "root")),
            vec!["Handle must be at most 3 characters", "Handle is reserved"]
        );
    }

    #[test]
    fn test_required_checkbox_must_be_checked() {
        let field = FormFieldSpec::new("terms", "Terms", InputType::Checkbox).required();
        assert_eq!(
            validate_field(&field, &Row::new("1").with("terms", false)),
            vec!["Terms is required"]
        );
        assert!(validate_field(&field, &Row::new("1").with("terms", true)).is_empty());
    }

    #[test]
    fn test_hidden_and_readonly_fields_skipped() {
        let fields = vec![
            FormFieldSpec::new("reason", "Reason", InputType::Text)
                .required()
                .visible_when(Condition::equals("status", "inactive")),
            FormFieldSpec::new("created", "Created", InputType::Readonly).required(),
        ];
        let active = Row::new("1").with("status", "active");
        assert!(validate(&fields, &active).is_valid());

        let inactive = Row::new("1").with("status", "inactive");
        assert_eq!(
            validate(&fields, &inactive).message_for("reason"),
            Some("Reason is required")
        );
    }
}
