//! Todo Filters
//!
//! Client-side completion filters over the fetched collection.

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Open,
    Completed,
}

/// Filter options in button order
pub const TODO_FILTERS: &[TodoFilter] = &[TodoFilter::All, TodoFilter::Open, TodoFilter::Completed];

impl TodoFilter {
    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Open => "Open",
            TodoFilter::Completed => "Completed",
        }
    }

    /// Stable `data-testid` for the filter button
    pub fn test_id(self) -> &'static str {
        match self {
            TodoFilter::All => "filter-all",
            TodoFilter::Open => "filter-open",
            TodoFilter::Completed => "filter-completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Open => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }

    /// Filtered copy of `todos`, keeping source order
    pub fn apply(self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
