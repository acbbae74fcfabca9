//! Todo Entity
//!
//! A single entry of the to-do list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

/// Opaque identifier of a todo item
///
/// Freshly created items get a UUID v4; any string read back from storage is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A to-do item
///
/// Serialized with camelCase keys (`id`, `title`, `isCompleted`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, never changes after creation
    pub id: TodoId,
    /// Label shown in the list
    pub title: String,
    /// Completion status
    pub is_completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            title: title.into(),
            is_completed: false,
        }
    }
}

impl Entity for TodoItem {
    type Id = TodoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validate a title typed by the user.
///
/// Returns the trimmed title, or `InvalidInput` when nothing is left.
pub fn validate_title(raw: &str) -> DomainResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidInput("title must not be empty".to_string()));
    }
    Ok(title.to_string())
}
