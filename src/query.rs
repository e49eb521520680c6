use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::config::{ClientConfig, ConfigError, DEFAULT_MODEL};
use crate::cost::CostCalculator;
use crate::llm::openai::OpenAI;
use crate::llm::traits::{generator_to_arc_dyn, Generator};
use crate::llm::{GenerateRequest, ResponseFormat};
use crate::pricing::{rate_for, WEB_SEARCH_CALL};

pub mod types;
pub mod error;

pub use types::{QueryExecutor, QueryResult, QueryExecuteResult};
pub use error::QueryError;

impl QueryExecutor {
    /// Build an executor that talks to the OpenAI Responses API.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            generator: generator_to_arc_dyn(OpenAI::from_config(&config)),
            timeout: config.timeout(),
            default_model: config.default_model,
        }
    }

    /// Resolve the API key from `api_key` or the environment.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when neither is set.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::resolve(api_key)?))
    }

    /// Use a custom generator, e.g. a proxy client or a test double.
    pub fn with_generator(generator: Arc<dyn Generator>, timeout: Duration) -> Self {
        Self {
            generator,
            timeout,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `prompt` and return the extracted text and the call's USD cost.
    ///
    /// Never fails: any error is logged and turned into
    /// [`QueryResult::degraded`].
    pub async fn query(
        &self,
        prompt: &str,
        model: &str,
        tools: &[JsonValue],
        response_format: ResponseFormat,
    ) -> QueryResult {
        let outcome = AssertUnwindSafe(self.try_query(prompt, model, tools, response_format))
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                error!(kind = err.kind(), error = %err, model, "query failed");
                QueryResult::degraded()
            }
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!(kind = "Panic", error = %message, model, "query failed");
                QueryResult::degraded()
            }
        }
    }

    /// [`QueryExecutor::query`] with the default model, text output and no tools.
    pub async fn query_default(&self, prompt: &str) -> QueryResult {
        self.query(prompt, &self.default_model, &[], ResponseFormat::Text).await
    }

    /// The fallible pipeline behind [`QueryExecutor::query`].
    pub async fn try_query(
        &self,
        prompt: &str,
        model: &str,
        tools: &[JsonValue],
        response_format: ResponseFormat,
    ) -> QueryExecuteResult {
        // Reject unpriced models before anything goes over the wire.
        let price = rate_for(model)?;

        let request = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            tools: tools.to_vec(),
            response_format,
            timeout: self.timeout,
        };
        let raw = self.generator.generate(&request).await?;

        let text_response = raw.text();
        let usage = raw.usage();
        let tool_calls = raw.count_tool_calls(WEB_SEARCH_CALL);
        let cost = CostCalculator::compute(&usage, price, tool_calls);
        debug!(
            model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            reasoning_tokens = usage.reasoning_tokens,
            billable_output_tokens = cost.billable_output_tokens,
            tool_calls,
            total_cost = cost.total_cost,
            "query priced"
        );

        Ok(QueryResult {
            text_response,
            raw_response: Some(raw),
            cost: cost.total_cost,
        })
    }
}
