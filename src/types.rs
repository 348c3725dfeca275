//! Common types used throughout qiniu-bed

use serde::{Deserialize, Serialize};

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A server response whose body this crate does not interpret.
///
/// JSON bodies are kept as parsed values, other text becomes a JSON string,
/// and an empty body is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: JsonValue,
}

impl ApiResponse {
    /// Build a response from a status code and raw body text
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.to_string()))
        };
        Self { status, body }
    }
}

/// Interpret a body as a bare string value.
///
/// A JSON string literal is unquoted; anything else is returned verbatim.
pub fn text_value(text: &str) -> String {
    serde_json::from_str::<String>(text.trim()).unwrap_or_else(|_| text.to_string())
}
