//! Remote API Bindings
//!
//! Browser `fetch` plumbing shared by the todo endpoints.

mod todo;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub use todo::*;

/// Failure at the fetch boundary. Displayed inline, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! Status: 404")]
    NotFound,
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Convert a thrown JS value into a network error
    pub fn from_js(value: JsValue) -> Self {
        FetchError::Network(js_message(&value))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

/// Map an HTTP status to success or the matching error
pub fn check_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(FetchError::NotFound),
        other => Err(FetchError::Status(other)),
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

/// GET `url` and deserialize the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window available".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(FetchError::from_js)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(FetchError::from_js)?;

    web_sys::console::log_1(&format!("[API] GET {}", url).into());

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(FetchError::from_js)?
        .dyn_into()
        .map_err(FetchError::from_js)?;

    if let Err(e) = check_status(response.status()) {
        web_sys::console::warn_1(&format!("[API] GET {} failed: {}", url, e).into());
        return Err(e);
    }

    let body = JsFuture::from(response.json().map_err(FetchError::from_js)?)
        .await
        .map_err(|e| FetchError::Decode(js_message(&e)))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_success_range() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
    }

    #[test]
    fn test_check_status_not_found() {
        let err = check_status(404).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP error! Status: 404");
    }

    #[test]
    fn test_check_status_other_failures() {
        assert_eq!(check_status(500), Err(FetchError::Status(500)));
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error! Status: 503");
        assert!(!FetchError::Status(500).is_not_found());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Network("Failed to fetch".into()).to_string(), "Failed to fetch");
        assert_eq!(
            FetchError::Decode("invalid type".into()).to_string(),
            "Malformed response: invalid type"
        );
    }
}
