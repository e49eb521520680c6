//! Tool specs accepted by the Responses API.
//!
//! Tools run on the provider side; this crate only forwards their
//! configuration and counts the resulting call items when billing.

use serde_json::{json, Value as JsonValue};

/// The hosted web search tool. Each resulting `web_search_call` is billed a flat fee.
pub fn web_search() -> JsonValue {
    json!({ "type": "web_search" })
}
