//! Edit State
//!
//! Which item, if any, the shared title input is currently editing.

use crate::domain::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// Input adds new items
    #[default]
    Idle,
    /// Input rewrites the title of this item
    Editing(TodoId),
}

impl EditState {
    pub fn target(&self) -> Option<&TodoId> {
        match self {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    /// Whether `id` is the current edit target
    pub fn targets(&self, id: &TodoId) -> bool {
        self.target() == Some(id)
    }
}
