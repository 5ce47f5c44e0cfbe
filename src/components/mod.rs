//! UI Components
//!
//! Reusable Leptos components.

mod filter_buttons;
mod todo_list;
mod todo_detail;

pub use filter_buttons::FilterButtons;
pub use todo_list::TodoList;
pub use todo_detail::TodoDetail;
