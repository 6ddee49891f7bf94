//! Query pipeline
//!
//! Derives the filtered sequence from a [`GridState`]: search, then filter,
//! then sort, each stage switched by the table config. The pipeline is a
//! pure function; [`Grid`](crate::Grid) caches its output and reruns it
//! only when an input changes.

pub mod filter;
pub mod search;
pub mod sort;

use crate::config::TableConfig;
use crate::model::ColumnSpec;
use crate::model::FilterSpec;
use crate::model::Row;
use crate::model::SortSpec;
use crate::state::GridState;

/// The static half of a query: specs and feature switches.
///
/// # Example
///
/// ```
/// use dashgrid::config::TableConfig;
/// use dashgrid::model::{ColumnSpec, Row};
/// use dashgrid::query::Query;
/// use dashgrid::GridState;
///
/// let columns = vec![ColumnSpec::new("name", "Name")];
/// let config = TableConfig::default();
/// let mut state = GridState::with_rows(vec![
///     Row::new("1").with("name", "Alice"),
///     Row::new("2").with("name", "Bob"),
/// ]);
/// state.search_term = "bob".into();
///
/// let view = Query::new(&columns, &[], &config).run(&state);
/// assert_eq!(view, vec![1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub columns: &'a [ColumnSpec],
    pub filters: &'a [FilterSpec],
    pub config: &'a TableConfig,
}

impl<'a> Query<'a> {
    pub fn new(
        columns: &'a [ColumnSpec],
        filters: &'a [FilterSpec],
        config: &'a TableConfig,
    ) -> Self {
        Self {
            columns,
            filters,
            config,
        }
    }

    /// Runs the pipeline and returns indices into `state.rows`, in display
    /// order.
    pub fn run(&self, state: &GridState) -> Vec<usize> {
        let needle = if self.config.enable_search {
            search::needle(&state.search_term)
        } else {
            None
        };
        let filter_active = self.config.enable_filters && !state.active_filters.is_empty();

        let mut indices: Vec<usize> = state
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| match &needle {
                Some(needle) => search::matches(row, self.columns, needle),
                None => true,
            })
            .filter(|(_, row)| {
                !filter_active || filter::matches(row, self.filters, &state.active_filters)
            })
            .map(|(i, _)| i)
            .collect();

        if self.config.enable_sorting
            && let Some(spec) = &state.sort
            && self.can_sort_by(spec)
        {
            sort::sort_indices(&state.rows, &mut indices, spec);
        }

        log::debug!(
            "Query matched {} of {} rows (search: {:?}, filters: {}, sort: {:?})",
            indices.len(),
            state.rows.len(),
            needle,
            state.active_filters.active_count(),
            state.sort
        );

        indices
    }

    /// Runs the pipeline and returns the rows themselves.
    pub fn rows<'s>(&self, state: &'s GridState) -> Vec<&'s Row> {
        self.run(state).into_iter().map(|i| &state.rows[i]).collect()
    }

    /// A sort key must name a sortable column; anything else is a no-op.
    fn can_sort_by(&self, spec: &SortSpec) -> bool {
        match self.columns.iter().find(|c| c.key == spec.key) {
            Some(column) if column.sortable => true,
            Some(_) => {
                log::debug!("Column '{}' is not sortable, ignoring sort", spec.key);
                false
            }
            None => {
                log::debug!("No column for sort key '{}', ignoring sort", spec.key);
                false
            }
        }
    }
}
