//! Todo Collection Manager
//!
//! Owns the ordered item list plus the transient edit and bulk-delete
//! selections. Every mutation of the list is written through to storage
//! before the call returns.

mod edit;

pub use edit::EditState;

use crate::config::StoreConfig;
use crate::domain::{validate_title, BulkDeleteMode, DomainError, DomainResult, TodoId, TodoItem};
use crate::repository::{snapshot, KeyValueStorage};

#[derive(Debug, Clone)]
pub struct TodoManager<S: KeyValueStorage> {
    items: Vec<TodoItem>,
    edit: EditState,
    input: String,
    pending_bulk: Option<BulkDeleteMode>,
    storage: S,
    config: StoreConfig,
}

impl<S: KeyValueStorage> TodoManager<S> {
    /// Load the collection from `storage`, or start empty.
    ///
    /// Unreadable or non-conforming snapshots are discarded with a warning.
    pub fn load(storage: S, config: StoreConfig) -> Self {
        let items = match storage.get_item(&config.storage_key) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(items) => {
                    log::debug!("loaded {} todos from '{}'", items.len(), config.storage_key);
                    items
                }
                Err(e) => {
                    log::warn!("discarding stored todos under '{}': {}", config.storage_key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read '{}', starting empty: {}", config.storage_key, e);
                Vec::new()
            }
        };

        Self {
            items,
            edit: EditState::Idle,
            input: String::new(),
            pending_bulk: None,
            storage,
            config,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn edit_target(&self) -> Option<&TodoId> {
        self.edit.target()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Current contents of the title input
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn pending_bulk_mode(&self) -> Option<BulkDeleteMode> {
        self.pending_bulk
    }

    /// Label for the shared submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Add" }
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed).count()
    }

    /// Completed share of the list, rounded down; 0 for an empty list
    pub fn progress_percentage(&self) -> u32 {
        let total = self.total_count();
        if total == 0 {
            return 0;
        }
        (self.completed_count() * 100 / total) as u32
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ========================
    // Editing
    // ========================

    /// Start editing `id`, loading its title into the input
    pub fn begin_edit(&mut self, id: &TodoId) -> DomainResult<()> {
        let title = self
            .get(id)
            .map(|item| item.title.clone())
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))?;
        self.edit = EditState::Editing(id.clone());
        self.input = title;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
        self.input.clear();
    }

    // ========================
    // Mutations
    // ========================

    /// Shared submit handler: commits the edit in progress, or adds a new item
    ///
    /// Fails with `NotFound` when the item being edited was removed meanwhile.
    pub fn submit(&mut self, title: impl Into<String>) -> DomainResult<TodoId> {
        match self.edit.target().cloned() {
            Some(id) => {
                if self.submit_edit(&id, title)? {
                    Ok(id)
                } else {
                    Err(DomainError::NotFound(format!("todo {}", id)))
                }
            }
            None => self.submit_new(title),
        }
    }

    /// Append a new item. Rejected while an edit is in progress, or when the
    /// title is blank.
    pub fn submit_new(&mut self, title: impl Into<String>) -> DomainResult<TodoId> {
        if let Some(target) = self.edit.target() {
            return Err(DomainError::Conflict(format!("todo {} is being edited", target)));
        }
        let title = validate_title(&title.into())?;

        let item = TodoItem::new(title);
        let id = item.id.clone();
        log::debug!("adding todo {}", id);
        self.items.push(item);
        self.input.clear();
        self.persist()?;
        Ok(id)
    }

    /// Replace the title of `id` and leave edit mode.
    ///
    /// A blank title is rejected before anything changes. Otherwise returns
    /// `Ok(false)` when the item no longer exists; edit mode is left either way.
    pub fn submit_edit(&mut self, id: &TodoId, title: impl Into<String>) -> DomainResult<bool> {
        let title = validate_title(&title.into())?;

        let found = match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.title = title;
                true
            }
            None => {
                log::debug!("edit target {} no longer exists", id);
                false
            }
        };
        self.cancel_edit();
        self.persist()?;
        Ok(found)
    }

    /// Remove `id`. Returns whether anything was removed.
    pub fn delete_one(&mut self, id: &TodoId) -> DomainResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() != before;
        if self.edit.targets(id) {
            self.cancel_edit();
        }
        self.persist()?;
        Ok(removed)
    }

    /// Flip completion of `id`. Returns whether the item exists.
    pub fn toggle_completed(&mut self, id: &TodoId) -> DomainResult<bool> {
        let found = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .map(|item| item.is_completed = !item.is_completed)
            .is_some();
        self.persist()?;
        Ok(found)
    }

    pub fn select_bulk_mode(&mut self, mode: Option<BulkDeleteMode>) {
        self.pending_bulk = mode;
    }

    /// Apply the selected bulk mode, if any, and reset the selector
    pub fn apply_bulk_delete(&mut self) -> DomainResult<()> {
        match self.pending_bulk.take() {
            Some(mode) => self.bulk_delete(mode),
            None => Ok(()),
        }
    }

    pub fn bulk_delete(&mut self, mode: BulkDeleteMode) -> DomainResult<()> {
        match mode {
            BulkDeleteMode::All => self.items.clear(),
            BulkDeleteMode::CompletedOnly => self.items.retain(|item| !item.is_completed),
        }
        log::debug!("bulk delete {:?}, {} todos left", mode, self.items.len());

        let target_gone = self.edit.target().is_some_and(|id| self.get(id).is_none());
        if target_gone {
            self.cancel_edit();
        }
        self.pending_bulk = None;
        self.persist()
    }

    /// Write the full collection to storage
    fn persist(&mut self) -> DomainResult<()> {
        let raw = snapshot::encode(&self.items)?;
        self.storage.set_item(&self.config.storage_key, &raw)
    }
}
