//! Configuration-driven data grid engine
//!
//! Search, filter, sort, paginate, select, edit and delete over an
//! in-memory collection of rows, plus a form engine for the edit path.
//! Rendering is left to the host; everything here is state and rules.

pub mod config;
pub mod confirm;
pub mod error;
pub mod form;
pub mod format;
pub mod listener;
pub mod model;
pub mod page;
pub mod query;
pub mod selection;

mod grid;
mod state;

pub use error::GridError;
pub use error::SaveError;
pub use grid::*;
pub use listener::EventLog;
pub use listener::GridEvent;
pub use listener::GridListener;
pub use state::GridState;
