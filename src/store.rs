//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todo shown in the detail view (None = list view)
    pub selected_todo: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Switch to the detail view for `id`
pub fn store_select_todo(store: &AppStore, id: u32) {
    store.selected_todo().set(Some(id));
}

/// Return to the list view
pub fn store_clear_selection(store: &AppStore) {
    store.selected_todo().set(None);
}
