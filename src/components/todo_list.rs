//! Todo List Component
//!
//! Fetches the whole collection on mount and shows it through the
//! current completion filter. Selection is reported to the parent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::FilterButtons;
use crate::config::use_api_config;
use crate::filter::TodoFilter;
use crate::load_state::{LoadState, LoadTracker};
use crate::models::Todo;

/// Todos to render for the current load state and filter.
/// Empty unless the collection has loaded.
pub fn visible_todos(state: &LoadState<Vec<Todo>>, filter: TodoFilter) -> Vec<Todo> {
    state.loaded().map(|todos| filter.apply(todos)).unwrap_or_default()
}

#[component]
pub fn TodoList(
    /// Called with the id of the clicked todo
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    let config = use_api_config();
    let (todos, set_todos) = signal(LoadTracker::<Vec<Todo>>::default());
    let (filter, set_filter) = signal(TodoFilter::default());

    // Load on mount
    Effect::new(move |_| {
        let config = config.clone();
        let mut token = 0;
        set_todos.update(|t| token = t.begin());
        web_sys::console::log_1(&"[LIST] Loading todos".into());
        spawn_local(async move {
            let result = api::fetch_todos(&config).await;
            match &result {
                Ok(loaded) => web_sys::console::log_1(&format!("[LIST] Loaded {} todos", loaded.len()).into()),
                Err(e) => web_sys::console::warn_1(&format!("[LIST] Load failed: {}", e).into()),
            }
            set_todos.update(|t| {
                t.finish(token, result);
            });
        });
    });

    // Derived copy, recomputed when the filter or the collection changes
    let filtered = Memo::new(move |_| {
        let current = filter.get();
        todos.with(|t| visible_todos(t.state(), current))
    });
    let total = move || todos.with(|t| t.state().loaded().map_or(0, |all| all.len()));

    view! {
        <div class="todo-list">
            <h2>"Todo List"</h2>

            <FilterButtons
                current=filter
                on_change=move |f| set_filter.set(f)
            />

            <Show when=move || todos.with(|t| t.state().is_loading())>
                <p class="loading">"Loading todos"</p>
            </Show>

            {move || todos.with(|t| t.state().error().map(|e| view! {
                <p class="error">{format!("Error loading todos: {}", e)}</p>
            }))}

            <ul class="todo-items">
                <For
                    each=move || filtered.get()
                    key=|todo| todo.id
                    children=move |todo| {
                        let id = todo.id;
                        view! {
                            <li>
                                <button
                                    class=if todo.completed { "completed" } else { "" }
                                    on:click=move |_| on_select.run(id)
                                >
                                    {todo.title}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <p class="todo-count">{move || format!("{} of {} todos", filtered.with(|f| f.len()), total())}</p>
        </div>
    }
}
