use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Token counters reported in a response's `usage` block.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Hidden reasoning tokens, nested under `output_tokens_details` on the wire.
    pub reasoning_tokens: u64,
}

impl TokenUsage {
    /// Read counters from a `usage` object.
    ///
    /// A missing block, a missing field, `null` or anything that is not a
    /// non-negative integer reads as 0. "Not reported" and "reported zero"
    /// are therefore indistinguishable.
    pub fn from_value(usage: Option<&JsonValue>) -> Self {
        let Some(usage) = usage else {
            return Self::default();
        };
        let reasoning_tokens = usage
            .get("output_tokens_details")
            .map(|details| counter(details, "reasoning_tokens"))
            .unwrap_or(0);
        Self {
            input_tokens: counter(usage, "input_tokens"),
            output_tokens: counter(usage, "output_tokens"),
            reasoning_tokens,
        }
    }
}

fn counter(obj: &JsonValue, field: &str) -> u64 {
    obj.get(field).and_then(JsonValue::as_u64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_full_usage_block() {
        let usage = json!({
            "input_tokens": 120,
            "output_tokens": 80,
            "output_tokens_details": { "reasoning_tokens": 64 },
            "total_tokens": 200
        });
        let tokens = TokenUsage::from_value(Some(&usage));
        assert_eq!(
            tokens,
            TokenUsage { input_tokens: 120, output_tokens: 80, reasoning_tokens: 64 }
        );
    }

    #[test]
    fn absent_usage_is_all_zero() {
        assert_eq!(TokenUsage::from_value(None), TokenUsage::default());
    }

    #[test]
    fn null_and_missing_counters_default_to_zero() {
        let usage = json!({ "input_tokens": null, "output_tokens": 7 });
        let tokens = TokenUsage::from_value(Some(&usage));
        assert_eq!(tokens.input_tokens, 0);
        assert_eq!(tokens.output_tokens, 7);
        assert_eq!(tokens.reasoning_tokens, 0);
    }

    #[test]
    fn details_without_reasoning_field_is_zero() {
        let usage = json!({
            "input_tokens": 1,
            "output_tokens": 2,
            "output_tokens_details": {}
        });
        assert_eq!(TokenUsage::from_value(Some(&usage)).reasoning_tokens, 0);

        let usage = json!({ "output_tokens_details": null });
        assert_eq!(TokenUsage::from_value(Some(&usage)).reasoning_tokens, 0);
    }

    #[test]
    fn non_object_usage_is_all_zero() {
        let usage = json!("not a usage block");
        assert_eq!(TokenUsage::from_value(Some(&usage)), TokenUsage::default());
    }
}
