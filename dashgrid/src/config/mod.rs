//! Configuration normalizer
//!
//! Caller options arrive partially filled (`*Options`, every field optional)
//! and are resolved over fixed defaults into fully populated `*Config`
//! values. Resolution never fails.

mod modal;
mod table;

pub use modal::*;
pub use table::*;
