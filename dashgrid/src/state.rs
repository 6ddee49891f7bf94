//! Grid state shared by the pipeline stages.

use crate::model::ActiveFilters;
use crate::model::Row;
use crate::model::SortSpec;
use crate::selection::Selection;

/// Everything the grid knows about one session.
///
/// The pipeline stages are pure functions of this struct plus the column
/// and filter specs; the [`Grid`](crate::Grid) is the only thing that
/// mutates it.
#[derive(Debug, Clone)]
pub struct GridState {
    /// Authoritative rows, unique by id.
    pub rows: Vec<Row>,
    pub search_term: String,
    pub active_filters: ActiveFilters,
    pub sort: Option<SortSpec>,
    /// 1-based page index.
    pub current_page: usize,
    pub selection: Selection,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            search_term: String::new(),
            active_filters: ActiveFilters::new(),
            sort: None,
            current_page: 1,
            selection: Selection::new(),
        }
    }
}

impl GridState {
    /// Creates a state seeded with rows and no query.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Position of the row with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }
}
