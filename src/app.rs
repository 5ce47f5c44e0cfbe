//! Todo Viewer App
//!
//! Switches between the todo list and the detail of the selected todo.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoDetail, TodoList};
use crate::config::ApiConfig;
use crate::store::{store_clear_selection, store_select_todo, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::default();
    web_sys::console::log_1(&format!("[APP] Using API at {}", config.base_url()).into());

    // Provide context to all children
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);
    provide_context(config);

    let showing_detail = Memo::new(move |_| store.selected_todo().get().is_some());
    let todo_id = Signal::derive(move || store.selected_todo().get().unwrap_or(0));

    view! {
        <main class="app-layout">
            <h1>"Todos"</h1>

            {move || if showing_detail.get() {
                view! {
                    <button class="back-btn" on:click=move |_| store_clear_selection(&store)>
                        "Back to list"
                    </button>
                    <TodoDetail todo_id=todo_id />
                }.into_any()
            } else {
                view! {
                    <TodoList on_select=move |id: u32| {
                        web_sys::console::log_1(&format!("[APP] Selected todo {}", id).into());
                        store_select_todo(&store, id);
                    } />
                }.into_any()
            }}
        </main>
    }
}
