//! Form engine for the edit path.
//!
//! Field specs describe what is edited and how it is checked; [`validate`]
//! runs the checks against a record and [`EditSession`] keeps the state of
//! one open form.
//!
//! # Example
//!
//! ```
//! use dashgrid::config::EditModalConfig;
//! use dashgrid::form::{EditSession, FormFieldSpec, InputType};
//! use dashgrid::model::Row;
//!
//! let fields = vec![
//!     FormFieldSpec::new("name", "Name", InputType::Text).required().min_length(2),
//! ];
//! let mut session = EditSession::new(Row::new("1"), fields, EditModalConfig::default());
//!
//! session.set_value("name", "A");
//! assert_eq!(
//!     session.validate().message_for("name"),
//!     Some("Name must be at least 2 characters"),
//! );
//! ```

mod field;
mod result;
mod session;
mod upload;
mod validate;

pub use field::*;
pub use result::{FieldError, ValidationResult};
pub use session::{EditSession, SectionView};
pub use upload::*;
pub use validate::{validate, validate_field};
