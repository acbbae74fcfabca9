//! Progress Bar Component

use leptos::prelude::*;

use crate::context::use_todos;

/// Completed / total counts and a bar filled to the completed percentage
#[component]
pub fn ProgressBar() -> impl IntoView {
    let todos = use_todos();
    let percentage = move || todos.with(|m| m.progress_percentage());

    view! {
        <div class="progress">
            <p class="progress-label">
                {move || todos.with(|m| format!(
                    "{} of {} completed ({}%)",
                    m.completed_count(),
                    m.total_count(),
                    m.progress_percentage(),
                ))}
            </p>
            <div class="progress-track">
                <div class="progress-fill" style:width=move || format!("{}%", percentage())></div>
            </div>
        </div>
    }
}
