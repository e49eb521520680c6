use serde::Serialize;

use crate::llm::tokens::TokenUsage;
use crate::pricing::{PricingEntry, WEB_SEARCH_COST_PER_CALL};

const TOKENS_PER_UNIT: f64 = 1_000_000.0;

/// Itemized USD cost of one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub billable_output_tokens: u64,
    pub tool_calls: u64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub tool_call_cost: f64,
    /// Sum of the three components, rounded to 6 decimal places.
    pub total_cost: f64,
}

/// Output tokens to bill.
///
/// Reasoning tokens are billed as output. When the reported reasoning count
/// exceeds the visible output count, the excess is added on top; otherwise it
/// is already contained in `output_tokens`.
pub fn billable_output_tokens(usage: &TokenUsage) -> u64 {
    usage.output_tokens + usage.reasoning_tokens.saturating_sub(usage.output_tokens)
}

pub struct CostCalculator;

impl CostCalculator {
    pub fn compute(usage: &TokenUsage, price: &PricingEntry, tool_calls: u64) -> CostBreakdown {
        let billable = billable_output_tokens(usage);
        let input_cost =
            (usage.input_tokens as f64 / TOKENS_PER_UNIT) * price.input_rate_usd_per_million_tokens;
        let output_cost =
            (billable as f64 / TOKENS_PER_UNIT) * price.output_rate_usd_per_million_tokens;
        let tool_call_cost = tool_calls as f64 * WEB_SEARCH_COST_PER_CALL;

        CostBreakdown {
            billable_output_tokens: billable,
            tool_calls,
            input_cost,
            output_cost,
            tool_call_cost,
            total_cost: round6(input_cost + output_cost + tool_call_cost),
        }
    }
}

/// Round to 6 decimal places based on the exact decimal expansion of `value`.
///
/// Scaling by 1e6 first would round the product and can push values such as
/// 2.4999999999999998e-6 up to 0.000003.
pub fn round6(value: f64) -> f64 {
    format!("{value:.6}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::rate_for;

    fn usage(input: u64, output: u64, reasoning: u64) -> TokenUsage {
        TokenUsage { input_tokens: input, output_tokens: output, reasoning_tokens: reasoning }
    }

    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    #[test]
    fn reasoning_within_output_is_not_double_counted() {
        assert_eq!(billable_output_tokens(&usage(0, 500, 200)), 500);
        assert_eq!(billable_output_tokens(&usage(0, 500, 500)), 500);
        assert_eq!(billable_output_tokens(&usage(0, 500, 0)), 500);
    }

    #[test]
    fn reasoning_beyond_output_is_billed() {
        assert_eq!(billable_output_tokens(&usage(0, 100, 900)), 900);
        assert_eq!(billable_output_tokens(&usage(0, 0, 42)), 42);
    }

    #[test]
    fn gpt5_mini_example() {
        let price = rate_for("gpt-5-mini").unwrap();
        let cost = CostCalculator::compute(&usage(1_000_000, 500_000, 500_000), price, 2);
        assert_eq!(cost.billable_output_tokens, 500_000);
        assert_close(cost.input_cost, 0.250);
        assert_close(cost.output_cost, 1.000);
        assert_close(cost.tool_call_cost, 0.02);
        assert_close(cost.total_cost, 1.27);
    }

    #[test]
    fn tool_call_cost_is_linear() {
        let price = rate_for("gpt-5").unwrap();
        let tokens = usage(12_344, 6_789, 1_000);
        let base = CostCalculator::compute(&tokens, price, 0).total_cost;
        for n in [1u64, 3, 10] {
            let with_calls = CostCalculator::compute(&tokens, price, n).total_cost;
            assert_close(with_calls - base, n as f64 * WEB_SEARCH_COST_PER_CALL);
        }
    }

    #[test]
    fn zero_usage_costs_nothing() {
        let price = rate_for("gpt-5-nano").unwrap();
        let cost = CostCalculator::compute(&TokenUsage::default(), price, 0);
        assert_eq!(cost.total_cost, 0.0);
    }

    #[test]
    fn total_is_rounded_to_six_places() {
        let price = rate_for("gpt-5-nano").unwrap();
        // 7 input tokens at $0.05/M = 0.00000035
        let cost = CostCalculator::compute(&usage(7, 0, 0), price, 0);
        assert_eq!(cost.total_cost, 0.0);

        let cost = CostCalculator::compute(&usage(333, 777, 0), rate_for("gpt-5").unwrap(), 0);
        let scaled = cost.total_cost * 1e6;
        assert!((scaled - scaled.round()).abs() < 1e-6);
        assert!(cost.total_cost >= 0.0 && cost.total_cost.is_finite());
    }

    #[test]
    fn rounding_follows_the_exact_decimal_value() {
        let price = rate_for("gpt-5").unwrap();

        // 2 * 1.25 / 1e6 is stored as 2.4999999999999998e-6
        let cost = CostCalculator::compute(&usage(2, 0, 0), price, 0);
        assert_eq!(cost.total_cost, 0.000002);

        let cost = CostCalculator::compute(&usage(2, 13, 0), price, 0);
        assert_eq!(cost.total_cost, 0.000132);
    }

    #[test]
    fn round6_behaviour() {
        assert_eq!(round6(1.2345674), 1.234567);
        assert_eq!(round6(1.2345676), 1.234568);
        assert_eq!(round6(0.0), 0.0);
    }
}
