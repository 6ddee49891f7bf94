//! Delete confirmation state machine.
//!
//! `Idle -> Pending -> (committed | cancelled) -> Idle`. Requesting a delete
//! only records what would be removed; rows change on confirm.

/// What a pending confirmation will delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    /// One row, with the name shown in the prompt.
    Single { id: String, display_name: String },
    /// The selection as it was when the bulk delete was requested.
    Bulk { ids: Vec<String> },
}

impl PendingDelete {
    /// Ids that confirming will remove.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            PendingDelete::Single { id, .. } => vec![id.as_str()],
            PendingDelete::Bulk { ids } => ids.iter().map(String::as_str).collect(),
        }
    }

    /// Prompt text for the confirmation dialog.
    pub fn message(&self) -> String {
        match self {
            PendingDelete::Single { display_name, .. } => {
                format!("Are you sure you want to delete \"{}\"?", display_name)
            }
            PendingDelete::Bulk { ids } if ids.len() == 1 => {
                "Are you sure you want to delete 1 selected item?".to_string()
            }
            PendingDelete::Bulk { ids } => {
                format!("Are you sure you want to delete {} selected items?", ids.len())
            }
        }
    }
}

/// Confirmation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Idle,
    Pending(PendingDelete),
}

impl ConfirmState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmState::Pending(_))
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        match self {
            ConfirmState::Pending(p) => Some(p),
            ConfirmState::Idle => None,
        }
    }

    /// Enters the pending state, replacing any earlier request.
    pub fn request(&mut self, pending: PendingDelete) {
        *self = ConfirmState::Pending(pending);
    }

    /// Leaves the pending state and hands back what was pending.
    pub fn take(&mut self) -> Option<PendingDelete> {
        match std::mem::take(self) {
            ConfirmState::Pending(p) => Some(p),
            ConfirmState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_returns_to_idle() {
        let mut state = ConfirmState::default();
        assert!(state.take().is_none());

        state.request(PendingDelete::Bulk {
            ids: vec!["1".into(), "2".into()],
        });
        assert!(state.is_pending());
        assert_eq!(
            state.pending().map(|p| p.message()),
            Some("Are you sure you want to delete 2 selected items?".to_string())
        );

        let taken = state.take();
        assert_eq!(taken.map(|p| p.ids().len()), Some(2));
        assert_eq!(state, ConfirmState::Idle);
    }
}
