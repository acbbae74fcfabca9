//! Snapshot Encoding
//!
//! The whole collection is stored as one JSON array under a single key.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Entity, TodoItem};

/// Encode the collection as a JSON array
pub fn encode(items: &[TodoItem]) -> DomainResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a stored JSON array, checking collection invariants
///
/// Fails on malformed JSON, missing fields, empty titles, or duplicate ids.
pub fn decode(raw: &str) -> DomainResult<Vec<TodoItem>> {
    let items: Vec<TodoItem> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.title.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!("todo {} has an empty title", item.id)));
        }
        if !seen.insert(item.id()) {
            return Err(DomainError::Conflict(format!("duplicate todo id {}", item.id)));
        }
    }

    Ok(items)
}
