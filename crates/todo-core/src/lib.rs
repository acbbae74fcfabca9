//! To-do collection core
//!
//! Domain types, the storage seam, and the collection manager used by the
//! web frontend. Nothing in here touches browser APIs.

pub mod config;
pub mod domain;
pub mod manager;
pub mod repository;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use domain::{validate_title, BulkDeleteMode, DomainError, DomainResult, Entity, TodoId, TodoItem};
pub use manager::{EditState, TodoManager};
pub use repository::{KeyValueStorage, MemoryStorage};
