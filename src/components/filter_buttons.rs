//! Filter Buttons Component
//!
//! All / Open / Completed selector for the todo list.

use leptos::prelude::*;

use crate::filter::{TodoFilter, TODO_FILTERS};

#[component]
pub fn FilterButtons(
    current: ReadSignal<TodoFilter>,
    on_change: impl Fn(TodoFilter) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-buttons">
            {TODO_FILTERS.iter().map(|&filter| {
                let is_selected = move || current.get() == filter;
                view! {
                    <button
                        data-testid=filter.test_id()
                        class=move || if is_selected() { "todo-button active" } else { "todo-button" }
                        on:click=move |_| on_change(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
