//! Bulk Delete Form Component

use leptos::prelude::*;
use todo_core::BulkDeleteMode;

use crate::context::use_todos;

/// Selector plus Apply button for removing many items at once
#[component]
pub fn BulkDeleteForm() -> impl IntoView {
    let todos = use_todos();

    let on_apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        todos.apply_bulk_delete();
    };

    view! {
        <form class="bulk-delete-form" on:submit=on_apply>
            <select
                prop:value=move || todos.pending_bulk_mode().map(|mode| mode.as_str()).unwrap_or("")
                on:change=move |ev| todos.select_bulk_mode(BulkDeleteMode::from_str(&event_target_value(&ev)))
            >
                <option value="">"Choose Option"</option>
                {BulkDeleteMode::ALL.iter().map(|mode| view! {
                    <option value=mode.as_str()>{mode.label()}</option>
                }).collect_view()}
            </select>
            <button type="submit">"Apply"</button>
        </form>
    }
}
