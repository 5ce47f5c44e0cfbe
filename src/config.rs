//! API Configuration
//!
//! Remote endpoint settings, provided via Leptos Context API.

use leptos::prelude::*;

/// Public demo API used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Remote todo API location
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` target for the whole collection
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    /// `GET` target for a single todo
    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// Get the API config from context, falling back to the default endpoint
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:3000//");
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.todos_url(), "http://localhost:3000/todos");
    }

    #[test]
    fn test_todo_url() {
        let config = ApiConfig::new(DEFAULT_BASE_URL);
        assert_eq!(config.todo_url(42), "https://jsonplaceholder.typicode.com/todos/42");
    }
}
