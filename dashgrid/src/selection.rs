//! Row selection state.
//!
//! Selection is keyed by row id so it stays stable while rows are filtered,
//! sorted, paged or edited. Ids may reference rows that are not currently
//! visible; nothing here prunes them implicitly.

use std::collections::HashSet;

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<String>,
    /// Anchor for range selection (Shift+click starting point)
    anchor: Option<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Get the anchor ID for range selection.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        let removed: Vec<_> = self.selected.drain().collect();
        self.anchor = None;
        removed
    }

    /// Toggle selection of an ID.
    /// Returns `true` if the ID is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.anchor = Some(id.to_string());
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Replace the whole selection with exactly `ids`.
    pub fn replace<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.selected = ids.into_iter().map(str::to_string).collect();
        self.anchor = None;
    }

    /// Returns `true` if every one of `ids` is selected (and there is at
    /// least one).
    pub fn contains_all<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for id in ids {
            if !self.selected.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Range select from anchor to target ID (Shift+click behavior).
    ///
    /// `ordered_ids` is the visible order. The range is added to the current
    /// selection. If the anchor is not visible, only the target is toggled
    /// on. Returns the IDs that were newly selected.
    pub fn range_select(&mut self, target_id: &str, ordered_ids: &[&str]) -> Vec<String> {
        let anchor_id = self.anchor.clone().unwrap_or_else(|| target_id.to_string());

        let anchor_pos = ordered_ids.iter().position(|id| *id == anchor_id);
        let target_pos = ordered_ids.iter().position(|id| *id == target_id);

        let (start, end) = match (anchor_pos, target_pos) {
            (Some(a), Some(t)) => (a.min(t), a.max(t)),
            _ => {
                self.anchor = Some(target_id.to_string());
                return if self.selected.insert(target_id.to_string()) {
                    vec![target_id.to_string()]
                } else {
                    vec![]
                };
            }
        };

        let mut added = Vec::new();
        for id in &ordered_ids[start..=end] {
            if self.selected.insert(id.to_string()) {
                added.push(id.to_string());
            }
        }
        added
    }

    /// Drop the given IDs from the selection.
    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.selected.remove(id);
            if self.anchor.as_deref() == Some(id) {
                self.anchor = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut sel = Selection::new();
        assert!(sel.toggle("a"));
        assert!(sel.is_selected("a"));
        assert!(!sel.toggle("a"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_replace_is_exact() {
        let mut sel = Selection::new();
        sel.toggle("x");
        sel.replace(["a", "b"]);
        assert_eq!(sel.selected(), vec!["a".to_string(), "b".to_string()]);
        assert!(sel.contains_all(["a", "b"]));
        assert!(!sel.contains_all(Vec::<&str>::new()));
    }

    #[test]
    fn test_range_select_from_anchor() {
        let mut sel = Selection::new();
        sel.toggle("b");
        let added = sel.range_select("d", &["a", "b", "c", "d", "e"]);
        assert_eq!(added.len(), 2);
        assert_eq!(sel.selected(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_range_select_without_visible_anchor() {
        let mut sel = Selection::new();
        sel.toggle("gone");
        sel.range_select("c", &["a", "b", "c"]);
        assert!(sel.is_selected("c"));
        assert!(sel.is_selected("gone"));
        assert_eq!(sel.anchor(), Some("c"));
    }
}
