pub use crate::config::{ClientConfig, ConfigError};
pub use crate::cost::{CostBreakdown, CostCalculator};
pub use crate::error::{Error, Result};
pub use crate::llm::{GenerateRequest, ResponseFormat};
pub use crate::llm::openai::OpenAI;
pub use crate::llm::traits::Generator;
pub use crate::llm::tokens::TokenUsage;
pub use crate::pricing::{rate_for, PricingEntry, PricingError};
pub use crate::query::{QueryError, QueryExecutor, QueryResult};
pub use crate::response::RawResponse;
pub use crate::tools::web_search;
