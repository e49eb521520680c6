//! Single-shot queries against the OpenAI Responses API, with the assistant
//! text extracted and the call priced in USD (input tokens, billable output
//! tokens including reasoning, and flat per-web-search fees).

pub mod llm;
pub mod tools;
pub mod pricing;
pub mod response;
pub mod cost;
pub mod query;
pub mod config;
pub mod error;
pub mod prelude;

pub use query::{QueryExecutor, QueryResult};

#[cfg(test)]
mod tests {
    use super::error::Error;
    use super::config::ConfigError;
    use super::llm::error::LLMError;
    use super::pricing::rate_for;
    use super::query::QueryError;

    #[test]
    fn module_errors_convert_into_crate_error() {
        let err: Error = QueryError::from(rate_for("unknown").unwrap_err()).into();
        assert_eq!(err.to_string(), "Query error: Pricing error: Unsupported model 'unknown'");

        let err: Error = QueryError::from(LLMError::InvalidResponse("empty".into())).into();
        assert!(matches!(err, Error::Query(QueryError::Generation(_))));

        let err: Error = ConfigError::MissingCredential("OPENAI_API_KEY").into();
        assert!(matches!(err, Error::Config(ConfigError::MissingCredential(_))));
    }
}
