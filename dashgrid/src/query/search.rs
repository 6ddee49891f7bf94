//! Free-text search stage.

use crate::format::format_value;
use crate::model::ColumnSpec;
use crate::model::Row;

/// Returns `true` if any searchable column's formatted value contains the
/// term, ignoring case.
///
/// `needle` must already be lowercased. Matching runs against the
/// formatter output so users find what they see (`"$5,000"`, not `5000`).
pub fn matches(row: &Row, columns: &[ColumnSpec], needle: &str) -> bool {
    columns
        .iter()
        .filter(|c| c.searchable)
        .any(|c| {
            format_value(row.value(&c.key), c.kind)
                .to_lowercase()
                .contains(needle)
        })
}

/// Normalizes a raw search box value; `None` means "no search".
///
/// The term is matched as typed (surrounding spaces included).
pub fn needle(term: &str) -> Option<String> {
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}
