//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches `/todos` payloads)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    /// Owner of the todo
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Label shown for the completion flag
    pub fn completed_label(&self) -> &'static str {
        if self.completed { "Yes" } else { "No" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_todo() {
        let json = r#"{"userId": 1, "id": 4, "title": "et porro tempora", "completed": true}"#;
        let todo: Todo = serde_json::from_str(json).expect("valid todo");

        assert_eq!(todo.id, 4);
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.title, "et porro tempora");
        assert!(todo.completed);
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        // jsonplaceholder answers unknown ids with an empty object
        let result = serde_json::from_str::<Todo>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_completed_label() {
        let mut todo = Todo { id: 1, user_id: 2, title: "x".into(), completed: false };
        assert_eq!(todo.completed_label(), "No");
        todo.completed = true;
        assert_eq!(todo.completed_label(), "Yes");
    }
}
