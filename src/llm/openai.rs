use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::config::ClientConfig;
use crate::llm::{
    traits::Generator,
    error::LLMError,
    GenerateRequest,
    GenerateResult,
};
use crate::response::RawResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Generator backed by the OpenAI Responses API (`POST {base_url}/responses`).
#[derive(Debug, Clone)]
pub struct OpenAI {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl OpenAI {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_key.clone()).with_base_url(config.base_url.clone())
    }

    /// Point the client at a different API root, e.g. a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }
}

/// Request body for `POST /responses`. `tools` is omitted when empty.
pub fn request_body(request: &GenerateRequest) -> JsonValue {
    let mut body = json!({
        "model": request.model,
        "input": request.prompt,
        "text": { "format": { "type": request.response_format.as_str() } },
    });
    if !request.tools.is_empty() {
        body["tools"] = JsonValue::Array(request.tools.clone());
    }
    body
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> LLMError {
    if err.is_timeout() {
        LLMError::Timeout(timeout)
    } else {
        LLMError::Http(err)
    }
}

impl Generator for OpenAI {
    fn generate<'a>(&'a self, request: &'a GenerateRequest) -> BoxFuture<'a, GenerateResult> {
        async move {
            let body = request_body(request);
            debug!(
                model = %request.model,
                tools = request.tools.len(),
                "sending responses request"
            );

            let response = self
                .client
                .post(self.endpoint())
                .bearer_auth(&self.api_key)
                .timeout(request.timeout)
                .json(&body)
                .send()
                .await
                .map_err(|e| transport_error(e, request.timeout))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LLMError::Status { status: status.as_u16(), body });
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| transport_error(e, request.timeout))?;
            let body: JsonValue = serde_json::from_slice(&bytes)?;
            if !body.is_object() {
                return Err(LLMError::InvalidResponse(format!(
                    "expected a JSON object, got {body}"
                )));
            }
            Ok(RawResponse::new(body))
        }
        .boxed()
    }
}
