use crate::llm::error::LLMError;
use crate::pricing::PricingError;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Generation error: {0}")]
    Generation(#[from] LLMError),
}

impl QueryError {
    /// Short name of the failure, reported alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::Pricing(PricingError::UnsupportedModel(_)) => "UnsupportedModel",
            QueryError::Generation(LLMError::Timeout(_)) => "Timeout",
            QueryError::Generation(LLMError::Status { .. }) => "Status",
            QueryError::Generation(LLMError::Http(_)) => "Transport",
            QueryError::Generation(LLMError::SerdeJsonError(_))
            | QueryError::Generation(LLMError::InvalidResponse(_)) => "InvalidResponse",
        }
    }
}
