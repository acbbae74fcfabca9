//! Repository Layer - Storage Trait
//!
//! Abstract key/value interface the manager persists through.
//! Implementations: browser session storage, in-memory map.

use crate::domain::DomainResult;

/// String key/value storage, shaped after the Web Storage API
pub trait KeyValueStorage {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> DomainResult<()>;
}
