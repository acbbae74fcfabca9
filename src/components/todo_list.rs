//! Todo List Component

use leptos::prelude::*;

use super::TodoRow;
use crate::context::use_todos;

/// All items in insertion order
#[component]
pub fn TodoList() -> impl IntoView {
    let todos = use_todos();

    view! {
        <div class="todo-list">
            <Show when=move || todos.with(|m| m.items().is_empty())>
                <p class="empty-hint">"Nothing to do yet."</p>
            </Show>
            // Keyed by the whole item so a toggled or renamed row re-renders
            <For
                each=move || todos.items()
                key=|item| item.clone()
                children=move |item| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
