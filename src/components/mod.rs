//! UI Components
//!
//! Leptos components for the to-do page.

mod todo_form;
mod bulk_delete_form;
mod progress_bar;
mod todo_list;
mod todo_row;

pub use todo_form::TodoForm;
pub use bulk_delete_form::BulkDeleteForm;
pub use progress_bar::ProgressBar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
