//! Repository Layer
//!
//! Storage abstraction and the persisted snapshot format.

mod traits;
mod memory;
pub mod snapshot;

pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
