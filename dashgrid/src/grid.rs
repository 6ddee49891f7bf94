//! The grid engine.
//!
//! [`Grid`] owns the authoritative rows and every piece of UI state, runs
//! the query pipeline, and is the only place where rows change. Each entry
//! point is synchronous: it updates state, recomputes the cached view when
//! an input changed, clamps the page and then notifies the listener.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::config::EditModalConfig;
use crate::config::TableConfig;
use crate::confirm::ConfirmState;
use crate::confirm::PendingDelete;
use crate::error::GridError;
use crate::error::Result;
use crate::error::SaveError;
use crate::form::EditSession;
use crate::form::FormFieldSpec;
use crate::form::PreviewStore;
use crate::format;
use crate::listener::GridListener;
use crate::listener::NoopListener;
use crate::model::ColumnSpec;
use crate::model::FilterSpec;
use crate::model::FilterValue;
use crate::model::Row;
use crate::model::SortSpec;
use crate::page;
use crate::page::PageItem;
use crate::page::PageWindow;
use crate::query::Query;
use crate::state::GridState;

/// Which rows [`Grid::export`] hands to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Every row passing search and filters, in display order.
    Filtered,
    /// Selected rows that still exist, in authoritative order.
    Selected,
}

/// Configuration-driven data grid.
///
/// # Example
///
/// ```
/// use dashgrid::model::{ColumnSpec, ColumnType, Row};
/// use dashgrid::Grid;
///
/// let mut grid = Grid::new(vec![
///     ColumnSpec::new("name", "Name"),
///     ColumnSpec::new("salary", "Salary").kind(ColumnType::Currency),
/// ])
/// .with_rows(vec![
///     Row::new("1").with("name", "Alice").with("salary", 7000),
///     Row::new("2").with("name", "Bob").with("salary", 5000),
/// ])
/// .unwrap();
///
/// grid.set_search("5,000");
/// let names: Vec<_> = grid.page_rows().iter().map(|r| r.display_name()).collect();
/// assert_eq!(names, vec!["Bob"]);
/// ```
pub struct Grid {
    state: GridState,
    columns: Vec<ColumnSpec>,
    filters: Vec<FilterSpec>,
    config: TableConfig,
    form_fields: Vec<FormFieldSpec>,
    modal: EditModalConfig,
    listener: Box<dyn GridListener>,
    previews: Option<Arc<dyn PreviewStore>>,
    confirm: ConfirmState,
    loading: bool,
    /// Filtered and sorted indices into `state.rows`.
    view: Vec<usize>,
}

impl Grid {
    /// Creates an empty grid with default configuration.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            state: GridState::default(),
            columns,
            filters: Vec::new(),
            config: TableConfig::default(),
            form_fields: Vec::new(),
            modal: EditModalConfig::default(),
            listener: Box::new(NoopListener),
            previews: None,
            confirm: ConfirmState::Idle,
            loading: false,
            view: Vec::new(),
        }
    }

    /// Seeds the grid. Fails if two rows share an id.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Result<Self> {
        self.set_data(rows)?;
        Ok(self)
    }

    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self.recompute();
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterSpec>) -> Self {
        self.filters = filters;
        self.recompute();
        self
    }

    /// Sets the fields and modal layout used by [`begin_edit`](Self::begin_edit).
    pub fn with_form(mut self, fields: Vec<FormFieldSpec>, modal: EditModalConfig) -> Self {
        self.form_fields = fields;
        self.modal = modal;
        self
    }

    pub fn with_listener(mut self, listener: impl GridListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Store used for image previews in edit sessions.
    pub fn with_previews(mut self, store: Arc<dyn PreviewStore>) -> Self {
        self.previews = Some(store);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Authoritative rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.state.rows
    }

    pub fn row(&self, id: &str) -> Option<&Row> {
        self.state.row(id)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn filter_specs(&self) -> &[FilterSpec] {
        &self.filters
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn form_fields(&self) -> &[FormFieldSpec] {
        &self.form_fields
    }

    pub fn modal(&self) -> &EditModalConfig {
        &self.modal
    }

    /// Formatted text of one cell.
    pub fn cell(&self, row: &Row, column: &ColumnSpec) -> String {
        format::render_cell(column, row)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Placeholder text to show instead of rows, if any.
    pub fn status_message(&self) -> Option<&str> {
        if self.loading {
            Some(self.config.loading_message.as_str())
        } else if self.view.is_empty() {
            Some(self.config.empty_message.as_str())
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replaces the rows wholesale.
    ///
    /// Query state and the selection are kept; the page is clamped to the
    /// new result size.
    pub fn set_data(&mut self, rows: Vec<Row>) -> Result<()> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.id()) {
                return Err(GridError::duplicate_id(row.id()));
            }
        }
        log::debug!("Seeding grid with {} rows", rows.len());
        self.state.rows = rows;
        self.recompute();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Query
    // -------------------------------------------------------------------------

    /// Sets the free-text search and returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.current_page = 1;
        self.recompute();
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    /// Sets one filter and returns to page 1. [`FilterValue::All`] clears it.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.state.active_filters.set(key, value);
        self.state.current_page = 1;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.state.active_filters.clear();
        self.state.current_page = 1;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.state.sort = sort;
        self.recompute();
    }

    /// Header click: a new column sorts ascending, the current one flips.
    ///
    /// Ignored when sorting is disabled or the column is not sortable.
    pub fn toggle_sort(&mut self, key: &str) {
        if !self.config.enable_sorting {
            return;
        }
        if !self.columns.iter().any(|c| c.key == key && c.sortable) {
            log::debug!("Ignoring sort toggle on '{}'", key);
            return;
        }
        let next = match &self.state.sort {
            Some(current) if current.key == key => SortSpec {
                key: current.key.clone(),
                direction: current.direction.toggled(),
            },
            _ => SortSpec::asc(key),
        };
        self.set_sort(Some(next));
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.state.sort.as_ref()
    }

    /// Rows passing search and filters, in display order.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        self.view.iter().map(|&i| &self.state.rows[i]).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&Row> {
        page::slice(
            &self.view,
            self.config.items_per_page,
            self.state.current_page,
            self.config.enable_pagination,
        )
        .iter()
        .map(|&i| &self.state.rows[i])
        .collect()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        page::total_pages(self.view.len(), self.config.items_per_page)
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(
            self.view.len(),
            self.config.items_per_page,
            self.state.current_page,
            self.config.enable_pagination,
        )
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        page::page_numbers(self.state.current_page, self.total_pages())
    }

    /// Jumps to a page, clamped into range. Stays on page 1 when
    /// pagination is disabled.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.current_page = self.clamped(page);
    }

    fn clamped(&self, page: usize) -> usize {
        if self.config.enable_pagination {
            page::clamp_page(page, self.total_pages())
        } else {
            1
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.current_page.saturating_sub(1));
    }

    /// Changes the page size and returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.config = self.config.clone().with_items_per_page(items_per_page);
        self.state.current_page = 1;
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Selected ids, sorted.
    pub fn selected_ids(&self) -> Vec<String> {
        self.state.selection.selected()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    /// `true` when every row on the current page is selected.
    pub fn is_page_selected(&self) -> bool {
        let ids: Vec<&str> = self.page_rows().iter().map(|r| r.id()).collect();
        self.state.selection.contains_all(ids)
    }

    /// Toggles one row. Unknown ids can only be deselected.
    pub fn toggle_row(&mut self, id: &str) {
        if !self.selection_enabled() {
            return;
        }
        if self.state.row(id).is_none() && !self.state.selection.is_selected(id) {
            log::warn!("Ignoring selection of unknown row '{}'", id);
            return;
        }
        self.state.selection.toggle(id);
        self.notify_selection();
    }

    /// Selects exactly the rows on the current page, or clears the
    /// selection when `selected` is false.
    pub fn select_all_on_page(&mut self, selected: bool) {
        if !self.selection_enabled() {
            return;
        }
        if selected {
            let ids: Vec<String> = self.page_rows().iter().map(|r| r.id().to_string()).collect();
            self.state.selection.replace(ids.iter().map(String::as_str));
        } else {
            self.state.selection.clear();
        }
        self.notify_selection();
    }

    /// Shift-click: selects the visible rows between the last toggled row
    /// and `id`.
    pub fn select_range(&mut self, id: &str) {
        if !self.selection_enabled() {
            return;
        }
        if self.state.row(id).is_none() {
            log::warn!("Ignoring range selection to unknown row '{}'", id);
            return;
        }
        let ordered: Vec<&str> = self.view.iter().map(|&i| self.state.rows[i].id()).collect();
        let added = self.state.selection.range_select(id, &ordered);
        if !added.is_empty() {
            self.notify_selection();
        }
    }

    pub fn clear_selection(&mut self) {
        if !self.selection_enabled() {
            return;
        }
        self.state.selection.clear();
        self.notify_selection();
    }

    fn selection_enabled(&self) -> bool {
        if !self.config.enable_selection {
            log::debug!("Selection is disabled");
        }
        self.config.enable_selection
    }

    fn notify_selection(&mut self) {
        let ids = self.state.selection.selected();
        self.listener.on_items_select(&ids);
    }

    // -------------------------------------------------------------------------
    // Edit
    // -------------------------------------------------------------------------

    /// Opens an edit session on a copy of the row.
    pub fn begin_edit(&self, id: &str) -> Option<EditSession> {
        let row = self.state.row(id)?;
        let session = EditSession::new(row.clone(), self.form_fields.clone(), self.modal.clone());
        Some(match &self.previews {
            Some(store) => session.with_previews(Arc::clone(store)),
            None => session,
        })
    }

    /// Validates the session and, if valid, replaces the row in place.
    ///
    /// On failure nothing changes and the session comes back inside the
    /// error with its validation result filled in.
    pub fn save_edit(&mut self, mut session: EditSession) -> std::result::Result<Row, SaveError> {
        if session.validate().is_invalid() {
            log::debug!(
                "Rejected edit of '{}': {:?}",
                session.id(),
                session.result().error_map()
            );
            return Err(SaveError::Invalid(session));
        }
        let Some(position) = self.state.position(session.id()) else {
            log::warn!("Row '{}' vanished while being edited", session.id());
            return Err(SaveError::RowMissing(session));
        };

        let row = session.into_record();
        self.state.rows[position] = row.clone();
        self.recompute();

        log::info!("Saved row '{}'", row.id());
        self.listener.on_data_change(&self.state.rows);
        self.listener.on_item_edit(&row);
        Ok(row)
    }

    /// Discards a session.
    pub fn cancel_edit(&self, session: EditSession) {
        log::debug!("Cancelled edit of '{}'", session.id());
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Current pending delete, if the confirmation prompt is open.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.confirm.pending()
    }

    /// Asks for confirmation before deleting a row. Rows are untouched.
    pub fn request_delete(&mut self, id: &str) -> bool {
        let Some(row) = self.state.row(id) else {
            log::warn!("Delete requested for unknown row '{}'", id);
            return false;
        };
        self.confirm.request(PendingDelete::Single {
            id: id.to_string(),
            display_name: row.display_name(),
        });
        true
    }

    /// Asks for confirmation before deleting the selected rows that still
    /// exist. Returns `false` when there are none.
    pub fn request_bulk_delete(&mut self) -> bool {
        let ids: Vec<String> = self
            .state
            .selection
            .selected()
            .into_iter()
            .filter(|id| self.state.row(id).is_some())
            .collect();
        if ids.is_empty() {
            return false;
        }
        self.confirm.request(PendingDelete::Bulk { ids });
        true
    }

    /// Commits the pending delete. Returns the ids actually removed.
    pub fn confirm_delete(&mut self) -> Vec<String> {
        let Some(pending) = self.confirm.take() else {
            return Vec::new();
        };

        let targets: HashSet<&str> = pending.ids().into_iter().collect();
        let mut removed = Vec::new();
        self.state.rows.retain(|row| {
            if targets.contains(row.id()) {
                removed.push(row.id().to_string());
                false
            } else {
                true
            }
        });

        match &pending {
            PendingDelete::Single { id, .. } => {
                self.state.selection.remove_all([id.as_str()]);
            }
            PendingDelete::Bulk { .. } => {
                self.state.selection.clear();
            }
        }
        self.recompute();

        log::info!("Deleted {} row(s)", removed.len());
        for id in &removed {
            self.listener.on_item_delete(id);
        }
        if !removed.is_empty() {
            self.listener.on_data_change(&self.state.rows);
        }
        if matches!(pending, PendingDelete::Bulk { .. }) {
            self.notify_selection();
        }
        removed
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.take();
    }

    // -------------------------------------------------------------------------
    // Outbound
    // -------------------------------------------------------------------------

    /// Hands copies of rows to the listener's export hook.
    pub fn export(&mut self, scope: ExportScope) -> Vec<Row> {
        let rows: Vec<Row> = match scope {
            ExportScope::Filtered => self.filtered_rows().into_iter().cloned().collect(),
            ExportScope::Selected => self
                .state
                .rows
                .iter()
                .filter(|r| self.state.selection.is_selected(r.id()))
                .cloned()
                .collect(),
        };
        log::debug!("Exporting {} row(s)", rows.len());
        self.listener.on_export(&rows);
        rows
    }

    pub fn refresh(&mut self) {
        self.listener.on_refresh();
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn recompute(&mut self) {
        self.view = Query::new(&self.columns, &self.filters, &self.config).run(&self.state);
        self.state.current_page = self.clamped(self.state.current_page);
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.state.rows.len())
            .field("filtered", &self.view.len())
            .field("page", &self.state.current_page)
            .field("confirm", &self.confirm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InputType;
    use crate::listener::EventLog;
    use crate::listener::GridEvent;

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row::new(i.to_string()).with("name", format!("Item {}", i)))
            .collect()
    }

    fn grid(n: usize) -> (Grid, EventLog) {
        let log = EventLog::new();
        let grid = Grid::new(vec![ColumnSpec::new("name", "Name")])
            .with_config(TableConfig::default().with_selection(true))
            .with_listener(log.clone())
            .with_rows(rows(n))
            .unwrap();
        (grid, log)
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Grid::new(Vec::new()).with_rows(vec![Row::new("1"), Row::new("1")]);
        assert!(matches!(result, Err(GridError::DuplicateId { id }) if id == "1"));
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let (mut grid, _) = grid(3);
        grid.toggle_sort("name");
        assert_eq!(grid.sort(), Some(&SortSpec::asc("name")));
        grid.toggle_sort("name");
        assert_eq!(grid.sort(), Some(&SortSpec::desc("name")));
        assert_eq!(grid.page_rows()[0].id(), "3");

        grid.toggle_sort("missing");
        assert_eq!(grid.sort(), Some(&SortSpec::desc("name")));
    }

    #[test]
    fn test_search_resets_page() {
        let (mut grid, _) = grid(25);
        grid.go_to_page(3);
        assert_eq!(grid.current_page(), 3);
        grid.set_search("item");
        assert_eq!(grid.current_page(), 1);
    }

    #[test]
    fn test_navigation_clamps() {
        let (mut grid, _) = grid(25);
        grid.go_to_page(99);
        assert_eq!(grid.current_page(), 3);
        grid.next_page();
        assert_eq!(grid.current_page(), 3);
        grid.go_to_page(0);
        assert_eq!(grid.current_page(), 1);
        grid.previous_page();
        assert_eq!(grid.current_page(), 1);
    }

    #[test]
    fn test_selection_disabled_is_noop() {
        let mut grid = Grid::new(Vec::new()).with_rows(rows(2)).unwrap();
        grid.toggle_row("1");
        grid.select_all_on_page(true);
        assert!(grid.selected_ids().is_empty());
    }

    #[test]
    fn test_select_all_on_page() {
        let (mut grid, log) = grid(15);
        grid.toggle_row("12");
        grid.select_all_on_page(true);
        assert_eq!(grid.selected_ids().len(), 10);
        assert!(!grid.is_selected("12"));
        assert!(grid.is_page_selected());

        grid.select_all_on_page(false);
        assert!(grid.selected_ids().is_empty());
        assert_eq!(log.drain().len(), 3);
    }

    #[test]
    fn test_select_range_follows_view() {
        let (mut grid, _) = grid(5);
        grid.toggle_sort("name");
        grid.toggle_sort("name");
        grid.toggle_row("4");
        grid.select_range("2");
        assert_eq!(grid.selected_ids(), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_single_delete_drops_selection_entry() {
        let (mut grid, log) = grid(3);
        grid.toggle_row("2");
        log.drain();

        assert!(grid.request_delete("2"));
        assert_eq!(
            grid.pending_delete().map(|p| p.message()),
            Some("Are you sure you want to delete \"Item 2\"?".to_string())
        );
        assert_eq!(grid.confirm_delete(), vec!["2"]);
        assert!(grid.selected_ids().is_empty());
        assert!(grid.pending_delete().is_none());

        let events = log.drain();
        assert_eq!(events[0], GridEvent::ItemDeleted("2".into()));
        assert!(matches!(&events[1], GridEvent::DataChanged(rows) if rows.len() == 2));
    }

    #[test]
    fn test_cancel_delete_keeps_rows() {
        let (mut grid, log) = grid(3);
        grid.request_delete("1");
        grid.cancel_delete();
        assert!(grid.confirm_delete().is_empty());
        assert_eq!(grid.rows().len(), 3);
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_bulk_delete_skips_missing_ids() {
        let (mut grid, log) = grid(3);
        grid.toggle_row("1");
        grid.toggle_row("3");
        grid.set_data(rows(2)).unwrap();
        assert_eq!(grid.selected_ids(), vec!["1", "3"]);
        log.drain();

        assert!(grid.request_bulk_delete());
        assert_eq!(grid.confirm_delete(), vec!["1"]);
        assert!(grid.selected_ids().is_empty());

        let deleted: Vec<GridEvent> = log
            .drain()
            .into_iter()
            .filter(|e| matches!(e, GridEvent::ItemDeleted(_)))
            .collect();
        assert_eq!(deleted, vec![GridEvent::ItemDeleted("1".into())]);
    }

    #[test]
    fn test_unknown_ids_are_not_selected() {
        let (mut grid, log) = grid(3);
        grid.toggle_row("1");
        grid.toggle_row("ghost");
        grid.select_range("ghost");
        assert_eq!(grid.selected_ids(), vec!["1"]);
        assert_eq!(log.drain(), vec![GridEvent::ItemsSelected(vec!["1".into()])]);

        assert!(grid.request_bulk_delete());
        assert_eq!(
            grid.pending_delete().map(|p| p.message()),
            Some("Are you sure you want to delete 1 selected item?".to_string())
        );
        assert_eq!(grid.confirm_delete(), vec!["1"]);
    }

    #[test]
    fn test_stale_selection_can_be_deselected() {
        let (mut grid, _) = grid(3);
        grid.toggle_row("3");
        grid.set_data(rows(2)).unwrap();
        assert!(!grid.request_bulk_delete());
        assert!(grid.pending_delete().is_none());

        grid.toggle_row("3");
        assert!(grid.selected_ids().is_empty());
    }

    #[test]
    fn test_page_pinned_without_pagination() {
        let mut grid = Grid::new(Vec::new())
            .with_config(TableConfig::default().with_items_per_page(2).with_pagination(false))
            .with_rows(rows(7))
            .unwrap();
        grid.go_to_page(3);
        assert_eq!(grid.current_page(), 1);
        grid.next_page();
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.page_window().current_page, grid.current_page());
        assert_eq!(grid.page_rows().len(), 7);
    }

    #[test]
    fn test_bulk_delete_needs_selection() {
        let (mut grid, _) = grid(3);
        assert!(!grid.request_bulk_delete());
        assert!(grid.pending_delete().is_none());
    }

    #[test]
    fn test_save_edit_replaces_in_place() {
        let (grid, log) = grid(3);
        let mut grid = grid.with_form(
            vec![FormFieldSpec::new("name", "Name", InputType::Text).required()],
            EditModalConfig::default(),
        );

        let mut session = grid.begin_edit("2").unwrap();
        session.set_value("name", "Renamed");
        let saved = grid.save_edit(session).unwrap();

        assert_eq!(grid.rows()[1], saved);
        assert_eq!(grid.rows()[1].display_name(), "Renamed");
        let events = log.drain();
        assert!(matches!(events[0], GridEvent::DataChanged(_)));
        assert_eq!(events[1], GridEvent::ItemEdited(saved));
    }

    #[test]
    fn test_save_edit_missing_row() {
        let (mut grid, _) = grid(3);
        let session = grid.begin_edit("3").unwrap();
        grid.request_delete("3");
        grid.confirm_delete();

        let err = grid.save_edit(session).unwrap_err();
        assert!(matches!(err, SaveError::RowMissing(_)));
        assert_eq!(err.session().id(), "3");
    }

    #[test]
    fn test_export_scopes() {
        let (mut grid, log) = grid(3);
        grid.set_search("item 2");
        grid.toggle_row("3");
        log.drain();

        assert_eq!(grid.export(ExportScope::Filtered).len(), 1);
        let selected = grid.export(ExportScope::Selected);
        assert_eq!(selected[0].id(), "3");
        assert_eq!(log.drain().len(), 2);
        assert_eq!(grid.rows().len(), 3);
    }

    #[test]
    fn test_status_message() {
        let (mut grid, _) = grid(1);
        assert_eq!(grid.status_message(), None);
        grid.set_search("zzz");
        assert_eq!(grid.status_message(), Some("No data available"));
        grid.set_loading(true);
        assert_eq!(grid.status_message(), Some("Loading..."));
    }
}
