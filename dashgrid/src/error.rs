//! Error types

/// Errors raised at the engine boundary.
///
/// Query, formatting and mutation paths never fail; these cover the few
/// places where caller-supplied data or configuration is rejected outright.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Two rows share the same id.
    #[error("Duplicate row id '{id}'")]
    DuplicateId { id: String },

    /// A row has no usable `id` field.
    #[error("Row at index {index} has no 'id' field")]
    MissingId { index: usize },

    /// A form field pattern failed to compile.
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// A JSON document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GridError {
    /// Creates a new duplicate id error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(field: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            source,
        }
    }
}

/// Why [`Grid::save_edit`](crate::Grid::save_edit) refused a session.
///
/// The session is handed back so the form can stay open.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The draft failed validation; see the session's result.
    #[error("Edit has validation errors")]
    Invalid(crate::form::EditSession),

    /// The row was removed while the form was open.
    #[error("Row being edited no longer exists")]
    RowMissing(crate::form::EditSession),
}

impl SaveError {
    pub fn session(&self) -> &crate::form::EditSession {
        match self {
            SaveError::Invalid(session) | SaveError::RowMissing(session) => session,
        }
    }

    pub fn into_session(self) -> crate::form::EditSession {
        match self {
            SaveError::Invalid(session) | SaveError::RowMissing(session) => session,
        }
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, GridError>;
