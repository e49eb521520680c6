pub mod traits;
pub mod openai;
pub mod tokens;
pub mod error;

use std::time::Duration;

use serde::{Serialize, Deserialize};
use serde_json::Value as JsonValue;

use crate::response::RawResponse;

/// Output format requested from the model (`text.format.type` on the wire).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Text,
    JsonObject,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        }
    }
}

/// Everything a generator needs to issue one request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Tool specs passed through to the provider untouched.
    pub tools: Vec<JsonValue>,
    pub response_format: ResponseFormat,
    pub timeout: Duration,
}

/// Result type for generator operations.
pub type LLMResult<T> = std::result::Result<T, error::LLMError>;

/// Convenience alias for what a generator returns.
pub type GenerateResult = LLMResult<RawResponse>;
