//! Todo Form Component
//!
//! Shared input for adding items and renaming the item being edited.

use leptos::prelude::*;

use crate::context::use_todos;

#[component]
pub fn TodoForm() -> impl IntoView {
    let todos = use_todos();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        todos.submit(&todos.input());
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                required=true
                placeholder="Enter your todo"
                prop:value=move || todos.input()
                on:input=move |ev| todos.set_input(event_target_value(&ev))
            />
            <button type="submit">{move || todos.submit_label()}</button>
            <Show when=move || todos.is_editing()>
                <button type="button" class="cancel-btn" on:click=move |_| todos.cancel_edit()>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
