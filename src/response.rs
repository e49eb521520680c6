use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::llm::tokens::TokenUsage;

/// Response body exactly as the provider returned it.
///
/// Nothing here mutates the body; the typed accessors below build a view
/// over it on demand and fall back to empty/zero values for anything missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResponse(JsonValue);

/// Output item types that carry model output rather than a tool invocation.
const NON_TOOL_ITEM_TYPES: &[&str] = &["message", "reasoning"];

/// One entry of the response's `output` sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputItem {
    Assistant { content: Vec<ContentPart> },
    ToolCall { kind: String },
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text { value: String },
    NonText,
}

impl OutputItem {
    pub fn from_value(item: &JsonValue) -> Self {
        if item.get("role").and_then(JsonValue::as_str) == Some("assistant") {
            let content = item
                .get("content")
                .and_then(JsonValue::as_array)
                .map(|parts| parts.iter().map(ContentPart::from_value).collect())
                .unwrap_or_default();
            return OutputItem::Assistant { content };
        }
        match item_type(item) {
            Some(kind) if !NON_TOOL_ITEM_TYPES.contains(&kind) => {
                OutputItem::ToolCall { kind: kind.to_string() }
            }
            _ => OutputItem::Other,
        }
    }
}

fn item_type(item: &JsonValue) -> Option<&str> {
    item.get("type").and_then(JsonValue::as_str)
}

impl ContentPart {
    pub fn from_value(part: &JsonValue) -> Self {
        match part.get("text").and_then(JsonValue::as_str) {
            Some(text) => ContentPart::Text { value: text.to_string() },
            None => ContentPart::NonText,
        }
    }
}

impl RawResponse {
    pub fn new(body: JsonValue) -> Self {
        Self(body)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_value(self) -> JsonValue {
        self.0
    }

    fn output(&self) -> &[JsonValue] {
        self.0
            .get("output")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Typed view of `output`. A missing or non-array field is empty.
    pub fn output_items(&self) -> Vec<OutputItem> {
        self.output().iter().map(OutputItem::from_value).collect()
    }

    /// Text of the first assistant item, parts concatenated in order and trimmed.
    pub fn text(&self) -> String {
        let Some(content) = self.output_items().into_iter().find_map(|item| match item {
            OutputItem::Assistant { content } => Some(content),
            _ => None,
        }) else {
            return String::new();
        };

        let joined: String = content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { value } => Some(value.as_str()),
                ContentPart::NonText => None,
            })
            .collect();
        joined.trim().to_string()
    }

    pub fn usage(&self) -> TokenUsage {
        TokenUsage::from_value(self.0.get("usage"))
    }

    /// Number of output items whose type tag is `kind`, whatever their role.
    pub fn count_tool_calls(&self, kind: &str) -> u64 {
        self.output()
            .iter()
            .filter(|item| item_type(item) == Some(kind))
            .count() as u64
    }
}

impl From<JsonValue> for RawResponse {
    fn from(body: JsonValue) -> Self {
        Self::new(body)
    }
}
