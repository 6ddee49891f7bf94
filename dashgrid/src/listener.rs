//! Collaborator interface for grid notifications.

use std::sync::Arc;
use std::sync::Mutex;

use crate::model::Row;

/// Receives notifications from a [`Grid`](crate::Grid).
///
/// Every method has a no-op default, so implementors only override what
/// they care about. Arguments are borrowed snapshots; the grid never hands
/// out mutable access to its rows.
///
/// # Example
///
/// ```
/// use dashgrid::GridListener;
///
/// struct Audit;
///
/// impl GridListener for Audit {
///     fn on_item_delete(&mut self, id: &str) {
///         println!("deleted {}", id);
///     }
/// }
/// ```
pub trait GridListener: Send {
    /// The authoritative rows changed (edit, delete).
    fn on_data_change(&mut self, _rows: &[Row]) {}

    /// A row was replaced by a validated edit.
    fn on_item_edit(&mut self, _row: &Row) {}

    /// A row was deleted. Called once per id for bulk deletes.
    fn on_item_delete(&mut self, _id: &str) {}

    /// The selection changed. Ids are sorted.
    fn on_items_select(&mut self, _ids: &[String]) {}

    /// Rows were handed off for export.
    fn on_export(&mut self, _rows: &[Row]) {}

    /// The host asked for fresh data.
    fn on_refresh(&mut self) {}
}

/// Listener that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl GridListener for NoopListener {}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    DataChanged(Vec<Row>),
    ItemEdited(Row),
    ItemDeleted(String),
    ItemsSelected(Vec<String>),
    Exported(Vec<Row>),
    Refreshed,
}

/// Listener that queues notifications for the host to drain.
///
/// Clones share the same queue, so keep one clone and give the other to
/// the grid.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GridEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all queued events.
    pub fn drain(&self) -> Vec<GridEvent> {
        self.events
            .lock()
            .map(|mut g| std::mem::take(&mut *g))
            .unwrap_or_default()
    }

    /// Copies the queued events without removing them.
    pub fn snapshot(&self) -> Vec<GridEvent> {
        self.events.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn push(&self, event: GridEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event);
        }
    }
}

impl GridListener for EventLog {
    fn on_data_change(&mut self, rows: &[Row]) {
        self.push(GridEvent::DataChanged(rows.to_vec()));
    }

    fn on_item_edit(&mut self, row: &Row) {
        self.push(GridEvent::ItemEdited(row.clone()));
    }

    fn on_item_delete(&mut self, id: &str) {
        self.push(GridEvent::ItemDeleted(id.to_string()));
    }

    fn on_items_select(&mut self, ids: &[String]) {
        self.push(GridEvent::ItemsSelected(ids.to_vec()));
    }

    fn on_export(&mut self, rows: &[Row]) {
        self.push(GridEvent::Exported(rows.to_vec()));
    }

    fn on_refresh(&mut self) {
        self.push(GridEvent::Refreshed);
    }
}
