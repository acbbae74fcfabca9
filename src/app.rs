//! To-Do App
//!
//! Root component: loads the collection and lays out the page.

use leptos::prelude::*;
use todo_core::TodoManager;

use crate::components::{BulkDeleteForm, ProgressBar, TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::storage::SessionStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let manager = TodoManager::load(SessionStorage, config.store);
    log::info!(
        "loaded {} todos from session storage key '{}'",
        manager.total_count(),
        manager.config().storage_key
    );

    // Provide the manager to all children
    provide_context(TodoContext::new(manager));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"To-Do List"</h1>

                <TodoForm />

                <BulkDeleteForm />

                <ProgressBar />

                <TodoList />
            </main>
        </div>
    }
}
