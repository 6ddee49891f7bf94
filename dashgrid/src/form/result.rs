use std::collections::BTreeMap;

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field key.
    pub field: String,
    /// Error message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation, in field order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub(crate) fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// First message per field, the shape a form displays.
    pub fn error_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for error in self.errors() {
            map.entry(error.field.clone())
                .or_insert_with(|| error.message.clone());
        }
        map
    }

    /// Every message recorded for a field, in check order.
    pub fn field_errors(&self, field: &str) -> Vec<&str> {
        self.errors()
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// First message for a field.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
