//! Todo Row Component
//!
//! A single item in the list.

use leptos::prelude::*;
use todo_core::TodoItem;

use crate::context::use_todos;

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let todos = use_todos();

    let TodoItem { id, title, is_completed } = item;
    let toggle_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();

    let row_class = move || {
        let mut class = String::from("todo-row");
        if is_completed {
            class.push_str(" completed");
        }
        if todos.is_edit_target(&id) {
            class.push_str(" editing");
        }
        class
    };

    view! {
        <div class=row_class>
            <label class="todo-main">
                <input
                    type="checkbox"
                    checked=is_completed
                    on:change=move |_| todos.toggle_completed(&toggle_id)
                />
                <span class="todo-title">{title}</span>
            </label>
            <div class="todo-actions">
                <button class="edit-btn" title="Edit" on:click=move |_| todos.begin_edit(&edit_id)>"✎"</button>
                <button class="delete-btn" title="Delete" on:click=move |_| todos.delete_one(&delete_id)>"×"</button>
            </div>
        </div>
    }
}
