//! Edit modal configuration.

use serde::Deserialize;
use serde::Serialize;

/// Width preset for the edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModalWidth {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[default]
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    TwoXl,
    #[serde(rename = "full")]
    Full,
}

/// A titled group of form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl SectionSpec {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            class_name: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Resolved edit modal configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditModalConfig {
    pub title: String,
    pub description: Option<String>,
    pub width: ModalWidth,
    pub sections: Vec<SectionSpec>,
}

impl Default for EditModalConfig {
    fn default() -> Self {
        Self {
            title: "Edit Item".to_string(),
            description: None,
            width: ModalWidth::Lg,
            sections: Vec::new(),
        }
    }
}

impl EditModalConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: ModalWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    /// Looks up a section by key.
    pub fn section(&self, key: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// Caller-supplied modal options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditModalOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<ModalWidth>,
    pub sections: Option<Vec<SectionSpec>>,
}

impl EditModalOptions {
    /// Merges these options over the defaults.
    pub fn resolve(self) -> EditModalConfig {
        let d = EditModalConfig::default();
        EditModalConfig {
            title: self.title.unwrap_or(d.title),
            description: self.description.or(d.description),
            width: self.width.unwrap_or(d.width),
            sections: self.sections.unwrap_or(d.sections),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_width_and_sections() {
        let options: EditModalOptions = serde_json::from_str(
            r#"{"width": "2xl", "sections": [{"key": "basic", "title": "Basic"}]}"#,
        )
        .unwrap();
        let config = options.resolve();

        assert_eq!(config.width, ModalWidth::TwoXl);
        assert_eq!(config.title, "Edit Item");
        assert_eq!(config.section("basic").map(|s| s.title.as_str()), Some("Basic"));
    }
}
