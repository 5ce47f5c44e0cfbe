//! Todo Endpoints

use crate::config::ApiConfig;
use crate::models::Todo;
use super::{get_json, FetchError};

/// `GET /todos`
pub async fn fetch_todos(config: &ApiConfig) -> Result<Vec<Todo>, FetchError> {
    get_json(&config.todos_url()).await
}

/// `GET /todos/{id}`; a missing todo surfaces as [`FetchError::NotFound`]
pub async fn fetch_todo(config: &ApiConfig, id: u32) -> Result<Todo, FetchError> {
    get_json(&config.todo_url(id)).await
}
