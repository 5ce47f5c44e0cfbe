//! Todo Detail Component
//!
//! Fetches a single todo whenever the selected id changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::use_api_config;
use crate::load_state::{LoadState, LoadTracker};
use crate::models::Todo;

/// What the detail panel renders for a given load state
#[derive(Debug, Clone, PartialEq)]
pub enum DetailDisplay {
    Loading,
    Error(String),
    NotFound,
    Found(Todo),
}

impl DetailDisplay {
    pub fn from_state(state: &LoadState<Todo>) -> Self {
        match state {
            LoadState::Loading => DetailDisplay::Loading,
            LoadState::Failed(e) if e.is_not_found() => DetailDisplay::NotFound,
            LoadState::Failed(e) => DetailDisplay::Error(e.to_string()),
            LoadState::Loaded(todo) => DetailDisplay::Found(todo.clone()),
            LoadState::Idle => DetailDisplay::NotFound,
        }
    }
}

#[component]
pub fn TodoDetail(
    /// Selected todo id; 0 means nothing selected
    #[prop(into)] todo_id: Signal<u32>,
) -> impl IntoView {
    let config = use_api_config();
    let (todo, set_todo) = signal(LoadTracker::<Todo>::default());

    // Refetch on every id change; older responses are dropped by token
    Effect::new(move |_| {
        let id = todo_id.get();
        if id == 0 {
            set_todo.update(|t| t.reset());
            return;
        }

        let config = config.clone();
        let mut token = 0;
        set_todo.update(|t| token = t.begin());
        web_sys::console::log_1(&format!("[DETAIL] Loading todo {}", id).into());
        spawn_local(async move {
            let result = api::fetch_todo(&config, id).await;
            if let Err(e) = &result {
                web_sys::console::warn_1(&format!("[DETAIL] Todo {} failed: {}", id, e).into());
            }
            let mut applied = false;
            set_todo.update(|t| applied = t.finish(token, result));
            if !applied {
                web_sys::console::log_1(&format!("[DETAIL] Dropped stale response for todo {}", id).into());
            }
        });
    });

    let display = Memo::new(move |_| todo.with(|t| DetailDisplay::from_state(t.state())));

    view! {
        <div class="todo-detail">
            {move || match display.get() {
                DetailDisplay::Loading => view! { <p class="loading">"Loading todo details..."</p> }.into_any(),
                DetailDisplay::Error(msg) => view! {
                    <p class="error">{format!("Error loading todo: {}", msg)}</p>
                }.into_any(),
                DetailDisplay::NotFound => view! { <p class="not-found">"No todo found."</p> }.into_any(),
                DetailDisplay::Found(todo) => view! {
                    <div>
                        <h2>"Todo Details"</h2>
                        <p>{format!("ID: {}", todo.id)}</p>
                        <p><span class="todo-title">{todo.title.clone()}</span></p>
                        <p>{format!("Status: {}", todo.completed_label())}</p>
                        <p>{format!("User ID: {}", todo.user_id)}</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
