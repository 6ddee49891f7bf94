//! Table configuration and its normalizer.

use serde::Deserialize;
use serde::Serialize;

/// Default rows per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Fully resolved table configuration.
///
/// Every option has a concrete value. Build one from partial caller input
/// with [`TableOptions::resolve`], or tweak the defaults directly.
///
/// # Example
///
/// ```
/// use dashgrid::config::TableConfig;
///
/// let config = TableConfig::default()
///     .with_items_per_page(25)
///     .with_selection(true)
///     .with_title("Employees");
/// assert!(config.enable_search);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub enable_search: bool,
    pub enable_filters: bool,
    pub enable_pagination: bool,
    pub enable_selection: bool,
    pub enable_sorting: bool,
    /// Rows per page. Never zero.
    pub items_per_page: usize,
    pub sticky_header: bool,
    pub striped: bool,
    pub bordered: bool,
    pub compact: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub search_placeholder: String,
    pub empty_message: String,
    pub loading_message: String,
    pub class_name: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            enable_search: true,
            enable_filters: true,
            enable_pagination: true,
            enable_selection: false,
            enable_sorting: true,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sticky_header: false,
            striped: false,
            bordered: false,
            compact: false,
            title: None,
            description: None,
            search_placeholder: "Search...".to_string(),
            empty_message: "No data available".to_string(),
            loading_message: "Loading...".to_string(),
            class_name: None,
        }
    }
}

impl TableConfig {
    /// Sets rows per page. Zero falls back to the default.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = normalize_items_per_page(items_per_page);
        self
    }

    pub fn with_selection(mut self, enabled: bool) -> Self {
        self.enable_selection = enabled;
        self
    }

    pub fn with_search(mut self, enabled: bool) -> Self {
        self.enable_search = enabled;
        self
    }

    pub fn with_filters(mut self, enabled: bool) -> Self {
        self.enable_filters = enabled;
        self
    }

    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn normalize_items_per_page(n: usize) -> usize {
    if n == 0 { DEFAULT_ITEMS_PER_PAGE } else { n }
}

/// Caller-supplied table options; anything left `None` takes the default.
///
/// Deserializes from camelCase JSON. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    pub enable_search: Option<bool>,
    pub enable_filters: Option<bool>,
    pub enable_pagination: Option<bool>,
    pub enable_selection: Option<bool>,
    pub enable_sorting: Option<bool>,
    pub items_per_page: Option<usize>,
    pub sticky_header: Option<bool>,
    pub striped: Option<bool>,
    pub bordered: Option<bool>,
    pub compact: Option<bool>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub search_placeholder: Option<String>,
    pub empty_message: Option<String>,
    pub loading_message: Option<String>,
    pub class_name: Option<String>,
}

impl TableOptions {
    /// Merges these options over the defaults.
    pub fn resolve(self) -> TableConfig {
        let d = TableConfig::default();
        TableConfig {
            enable_search: self.enable_search.unwrap_or(d.enable_search),
            enable_filters: self.enable_filters.unwrap_or(d.enable_filters),
            enable_pagination: self.enable_pagination.unwrap_or(d.enable_pagination),
            enable_selection: self.enable_selection.unwrap_or(d.enable_selection),
            enable_sorting: self.enable_sorting.unwrap_or(d.enable_sorting),
            items_per_page: normalize_items_per_page(
                self.items_per_page.unwrap_or(d.items_per_page),
            ),
            sticky_header: self.sticky_header.unwrap_or(d.sticky_header),
            striped: self.striped.unwrap_or(d.striped),
            bordered: self.bordered.unwrap_or(d.bordered),
            compact: self.compact.unwrap_or(d.compact),
            title: self.title.or(d.title),
            description: self.description.or(d.description),
            search_placeholder: self.search_placeholder.unwrap_or(d.search_placeholder),
            empty_message: self.empty_message.unwrap_or(d.empty_message),
            loading_message: self.loading_message.unwrap_or(d.loading_message),
            class_name: self.class_name.or(d.class_name),
        }
    }
}

impl From<TableOptions> for TableConfig {
    fn from(options: TableOptions) -> Self {
        options.resolve()
    }
}
