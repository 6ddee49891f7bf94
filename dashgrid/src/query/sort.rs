//! Ordering stage.

use std::cmp::Ordering;

use crate::model::Direction;
use crate::model::Row;
use crate::model::SortSpec;
use crate::model::Value;

/// Compares two field values for sorting.
///
/// Numbers compare numerically, everything else by string form. Nulls are
/// greater than any value and stay last whatever the direction: only the
/// non-null comparison is reversed for [`Direction::Descending`].
pub fn compare(a: &Value, b: &Value, direction: Direction) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let ordering = match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => a.to_string().cmp(&b.to_string()),
    };

    match direction {
        Direction::Ascending => ordering,
        Direction::Descending => ordering.reverse(),
    }
}

/// Sorts row indices in place by the spec. Stable for equal keys.
pub fn sort_indices(rows: &[Row], indices: &mut [usize], spec: &SortSpec) {
    indices.sort_by(|&a, &b| {
        compare(
            rows[a].value(&spec.key),
            rows[b].value(&spec.key),
            spec.direction,
        )
    });
}
