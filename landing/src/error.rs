//! Error type shared by the DOM-facing parts of the landing page.
//!
//! Nothing here is fatal: callers log the error and keep rendering with
//! whatever state they already have.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LandingError>;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document (or its <head>) is not available")]
    NoDocument,

    #[error("failed to {action} scroll listener: {message}")]
    Listener {
        action: &'static str,
        message: String,
    },

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LandingError {
    pub(crate) fn listener(action: &'static str, err: &JsValue) -> Self {
        Self::Listener {
            action,
            message: js_message(err),
        }
    }

    pub(crate) fn dom(err: JsValue) -> Self {
        Self::Dom(js_message(&err))
    }
}

/// Best-effort text for a thrown JS value.
fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_error_names_the_action() {
        let err = LandingError::Listener {
            action: "detach",
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "failed to detach scroll listener: boom");
    }

    #[test]
    fn config_error_wraps_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LandingError::from(parse);
        assert!(err.to_string().starts_with("invalid site configuration:"));
    }
}
