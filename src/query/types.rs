use std::sync::Arc;
use std::time::Duration;
use serde::Serialize;
use crate::llm::traits::Generator;
use crate::response::RawResponse;
use super::error::QueryError;

/// Issues single Responses API calls and prices them.
pub struct QueryExecutor {
    /// The collaborator that performs the actual request.
    pub(crate) generator: Arc<dyn Generator>,

    /// Per-request timeout handed to the generator.
    pub(crate) timeout: Duration,

    /// Model used by `query_default`.
    pub(crate) default_model: String,
}

/// Outcome of one query.
///
/// A failed query is reported as empty text, no raw response and zero cost;
/// there is no separate success flag.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QueryResult {
    pub text_response: String,
    pub raw_response: Option<RawResponse>,
    /// USD, rounded to 6 decimal places.
    pub cost: f64,
}

impl QueryResult {
    pub fn degraded() -> Self {
        Self {
            text_response: String::new(),
            raw_response: None,
            cost: 0.0,
        }
    }
}

pub type QueryExecuteResult = Result<QueryResult, QueryError>;
