//! Sort spec for grid ordering.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Descending order (Z-A, 9-0).
    #[serde(alias = "desc")]
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// The active sort: one column key and a direction.
///
/// # Example
///
/// ```
/// use dashgrid::model::{Direction, SortSpec};
///
/// let sort = SortSpec::desc("score");
/// assert_eq!(sort.direction, Direction::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    #[serde(default)]
    pub direction: Direction,
}

impl SortSpec {
    /// Creates an ascending sort on a field.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Ascending,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Descending,
        }
    }
}
