//! Application Context
//!
//! The todo manager, shared with every component via the Leptos Context API.

use leptos::prelude::*;
use todo_core::{BulkDeleteMode, DomainError, DomainResult, TodoId, TodoItem, TodoManager};

use crate::storage::SessionStorage;

pub type SessionTodoManager = TodoManager<SessionStorage>;

/// Reactive handle to the todo manager
#[derive(Clone, Copy)]
pub struct TodoContext {
    manager: RwSignal<SessionTodoManager>,
}

impl TodoContext {
    pub fn new(manager: SessionTodoManager) -> Self {
        Self {
            manager: RwSignal::new(manager),
        }
    }

    /// Read the manager, tracking it for reactive updates
    pub fn with<R>(&self, f: impl FnOnce(&SessionTodoManager) -> R) -> R {
        self.manager.with(f)
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.with(|m| m.items().to_vec())
    }

    pub fn input(&self) -> String {
        self.with(|m| m.input().to_string())
    }

    pub fn submit_label(&self) -> &'static str {
        self.with(|m| m.submit_label())
    }

    pub fn is_editing(&self) -> bool {
        self.with(|m| m.is_editing())
    }

    pub fn is_edit_target(&self, id: &TodoId) -> bool {
        self.with(|m| m.edit_state().targets(id))
    }

    pub fn pending_bulk_mode(&self) -> Option<BulkDeleteMode> {
        self.with(|m| m.pending_bulk_mode())
    }

    // ========================
    // Actions
    // ========================

    pub fn set_input(&self, text: String) {
        self.manager.update(|m| m.set_input(text));
    }

    /// Add or update from the typed title; blank titles are refused
    pub fn submit(&self, raw: &str) {
        self.manager.update(|m| match m.submit(raw) {
            Err(DomainError::InvalidInput(e)) => log::warn!("rejected todo title: {}", e),
            result => report("submit", result),
        });
    }

    pub fn begin_edit(&self, id: &TodoId) {
        self.manager.update(|m| report("begin edit", m.begin_edit(id)));
    }

    pub fn cancel_edit(&self) {
        self.manager.update(|m| m.cancel_edit());
    }

    pub fn delete_one(&self, id: &TodoId) {
        self.manager.update(|m| report("delete", m.delete_one(id)));
    }

    pub fn toggle_completed(&self, id: &TodoId) {
        self.manager.update(|m| report("toggle", m.toggle_completed(id)));
    }

    pub fn select_bulk_mode(&self, mode: Option<BulkDeleteMode>) {
        self.manager.update(|m| m.select_bulk_mode(mode));
    }

    pub fn apply_bulk_delete(&self) {
        self.manager.update(|m| report("bulk delete", m.apply_bulk_delete()));
    }
}

/// Get the todo context provided by `App`
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}

fn report<T>(action: &str, result: DomainResult<T>) {
    if let Err(e) = result {
        log::error!("{} failed: {}", action, e);
    }
}
