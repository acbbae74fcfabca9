//! Domain Layer
//!
//! Entities, value types and errors. No storage or browser concerns here.

mod entity;
mod todo;
mod bulk;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo::{TodoItem, TodoId, validate_title};
pub use bulk::BulkDeleteMode;
