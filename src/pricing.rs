use serde::Serialize;

/// Output item type the flat tool-call fee is billed against.
pub const WEB_SEARCH_CALL: &str = "web_search_call";

/// Flat fee per web search tool call, in USD ($10 / 1,000 calls).
pub const WEB_SEARCH_COST_PER_CALL: f64 = 0.01;

/// Per-model token rates, in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingEntry {
    pub model_id: &'static str,
    pub input_rate_usd_per_million_tokens: f64,
    pub output_rate_usd_per_million_tokens: f64,
}

const PRICING: &[PricingEntry] = &[
    PricingEntry {
        model_id: "gpt-5",
        input_rate_usd_per_million_tokens: 1.250,
        output_rate_usd_per_million_tokens: 10.000,
    },
    PricingEntry {
        model_id: "gpt-5-mini",
        input_rate_usd_per_million_tokens: 0.250,
        output_rate_usd_per_million_tokens: 2.000,
    },
    PricingEntry {
        model_id: "gpt-5-nano",
        input_rate_usd_per_million_tokens: 0.050,
        output_rate_usd_per_million_tokens: 0.400,
    },
];

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Unsupported model '{0}'")]
    UnsupportedModel(String),
}

/// Look up the rates for `model_id`.
pub fn rate_for(model_id: &str) -> Result<&'static PricingEntry, PricingError> {
    PRICING
        .iter()
        .find(|entry| entry.model_id == model_id)
        .ok_or_else(|| PricingError::UnsupportedModel(model_id.to_string()))
}

pub fn supported_models() -> impl Iterator<Item = &'static str> {
    PRICING.iter().map(|entry| entry.model_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_resolve() {
        let mini = rate_for("gpt-5-mini").expect("gpt-5-mini is priced");
        assert_eq!(mini.input_rate_usd_per_million_tokens, 0.250);
        assert_eq!(mini.output_rate_usd_per_million_tokens, 2.000);

        let full = rate_for("gpt-5").expect("gpt-5 is priced");
        assert_eq!(full.output_rate_usd_per_million_tokens, 10.000);
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = rate_for("gpt-4o").unwrap_err();
        assert!(matches!(err, PricingError::UnsupportedModel(ref m) if m == "gpt-4o"));
        assert_eq!(err.to_string(), "Unsupported model 'gpt-4o'");
    }

    #[test]
    fn model_ids_are_case_sensitive() {
        assert!(rate_for("GPT-5").is_err());
    }

    #[test]
    fn supported_models_are_the_table_keys() {
        let models: Vec<_> = supported_models().collect();
        assert_eq!(models, vec!["gpt-5", "gpt-5-mini", "gpt-5-nano"]);
    }

    #[test]
    fn rates_are_non_negative() {
        for model in supported_models() {
            let entry = rate_for(model).unwrap();
            assert!(entry.input_rate_usd_per_million_tokens >= 0.0);
            assert!(entry.output_rate_usd_per_million_tokens >= 0.0);
        }
    }
}
