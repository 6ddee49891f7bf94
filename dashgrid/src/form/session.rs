//! Edit session: form state for one record.

use std::fmt;
use std::sync::Arc;

use crate::config::EditModalConfig;
use crate::config::SectionSpec;
use crate::model::Row;
use crate::model::Value;

use super::Attachment;
use super::FieldError;
use super::FileInfo;
use super::FormFieldSpec;
use super::InputType;
use super::PreviewHandle;
use super::PreviewStore;
use super::ValidationResult;
use super::validate;

/// Visible fields grouped under one section.
#[derive(Debug)]
pub struct SectionView<'a> {
    /// `None` for the implicit section holding unsectioned fields.
    pub section: Option<&'a SectionSpec>,
    pub fields: Vec<&'a FormFieldSpec>,
}

/// The open edit form.
///
/// Holds a working copy of the record, the last validation result and any
/// attached files. Dropping the session (after save, cancel or anything
/// else) releases every attachment preview.
pub struct EditSession {
    original: Row,
    draft: Row,
    fields: Vec<FormFieldSpec>,
    modal: EditModalConfig,
    result: ValidationResult,
    attachments: Vec<Attachment>,
    previews: Option<Arc<dyn PreviewStore>>,
}

impl EditSession {
    /// Opens a session on a copy of `record`.
    pub fn new(record: Row, fields: Vec<FormFieldSpec>, modal: EditModalConfig) -> Self {
        Self {
            draft: record.clone(),
            original: record,
            fields,
            modal,
            result: ValidationResult::Valid,
            attachments: Vec::new(),
            previews: None,
        }
    }

    /// Uses `store` to allocate previews for attached images.
    pub fn with_previews(mut self, store: Arc<dyn PreviewStore>) -> Self {
        self.previews = Some(store);
        self
    }

    /// Id of the row being edited.
    pub fn id(&self) -> &str {
        self.original.id()
    }

    /// The record as it was when the session opened.
    pub fn original(&self) -> &Row {
        &self.original
    }

    /// The working copy.
    pub fn draft(&self) -> &Row {
        &self.draft
    }

    pub fn modal(&self) -> &EditModalConfig {
        &self.modal
    }

    pub fn fields(&self) -> &[FormFieldSpec] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FormFieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Returns `true` if the draft differs from the original.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Stores a value for a field, applying its transform.
    ///
    /// Readonly fields are left untouched. Clears the field's errors.
    pub fn set_value(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let value = match self.field(key) {
            Some(field) if field.input == InputType::Readonly => {
                log::warn!("Ignoring write to readonly field '{}'", key);
                return;
            }
            Some(field) => match &field.transform {
                Some(transform) => transform.apply(value),
                None => value,
            },
            None => value,
        };
        self.draft.set(key, value);
        self.clear_error(key);
    }

    fn clear_error(&mut self, key: &str) {
        if let ValidationResult::Invalid(errors) = &self.result {
            let remaining: Vec<FieldError> =
                errors.iter().filter(|e| e.field != key).cloned().collect();
            self.result = ValidationResult::from_errors(remaining);
        }
    }

    /// Fields shown for the current draft, in declaration order.
    pub fn visible_fields(&self) -> Vec<&FormFieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.is_visible(&self.draft))
            .collect()
    }

    /// Visible fields grouped by section.
    ///
    /// Fields without a known section come first under `section: None`;
    /// configured sections follow in order. Empty groups are omitted.
    pub fn sections(&self) -> Vec<SectionView<'_>> {
        let visible = self.visible_fields();
        let mut views = Vec::with_capacity(self.modal.sections.len() + 1);

        let loose: Vec<&FormFieldSpec> = visible
            .iter()
            .copied()
            .filter(|f| {
                f.section
                    .as_deref()
                    .is_none_or(|key| self.modal.section(key).is_none())
            })
            .collect();
        if !loose.is_empty() {
            views.push(SectionView {
                section: None,
                fields: loose,
            });
        }

        for section in &self.modal.sections {
            let fields: Vec<&FormFieldSpec> = visible
                .iter()
                .copied()
                .filter(|f| f.section.as_deref() == Some(section.key.as_str()))
                .collect();
            if !fields.is_empty() {
                views.push(SectionView {
                    section: Some(section),
                    fields,
                });
            }
        }

        views
    }

    // -------------------------------------------------------------------------
    // Attachments
    // -------------------------------------------------------------------------

    /// Attaches a file to a field. Returns the preview URL for images when
    /// a preview store is configured.
    pub fn attach_file(&mut self, key: &str, file: FileInfo) -> Option<String> {
        let preview = match &self.previews {
            Some(store) if file.is_image() => Some(PreviewHandle::new(Arc::clone(store), &file)),
            _ => None,
        };
        let url = preview.as_ref().map(|p| p.url().to_string());

        self.attachments.push(Attachment {
            field: key.to_string(),
            file,
            preview,
        });
        self.sync_file_value(key);
        url
    }

    /// Removes the `index`-th attachment of a field, releasing its preview.
    pub fn remove_file(&mut self, key: &str, index: usize) -> Option<FileInfo> {
        let position = self
            .attachments
            .iter()
            .enumerate()
            .filter(|(_, a)| a.field == key)
            .nth(index)
            .map(|(i, _)| i)?;
        let attachment = self.attachments.remove(position);
        self.sync_file_value(key);
        Some(attachment.file.clone())
    }

    /// Attachments of one field, in the order they were added.
    pub fn attachments<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Attachment> + 'a {
        self.attachments.iter().filter(move |a| a.field == key)
    }

    /// Mirrors attachment names into the draft so required checks see them.
    fn sync_file_value(&mut self, key: &str) {
        let names: Vec<Value> = self
            .attachments(key)
            .map(|a| Value::from(a.file.name.as_str()))
            .collect();
        self.draft.set(key, Value::List(names));
        self.clear_error(key);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validates the draft and stores the result.
    pub fn validate(&mut self) -> &ValidationResult {
        self.result = validate(&self.fields, &self.draft);
        &self.result
    }

    /// Result of the last [`validate`](Self::validate) call, minus fields
    /// edited since.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Closes the session and returns the draft. Previews are released.
    pub fn into_record(self) -> Row {
        self.draft
    }
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("id", &self.original.id())
            .field("draft", &self.draft)
            .field("result", &self.result)
            .field("attachments", &self.attachments)
            .finish_non_exhaustive()
    }
}
