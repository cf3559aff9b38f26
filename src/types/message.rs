//! Messages emitted by the reasoning loop.
//!
//! This is the loop-facing half of the translation layer: a closed union
//! over the message kinds the loop is allowed to emit. Anything else is a
//! contract breach and surfaces as
//! [`MuninnError::UnrecognizedMessage`](crate::MuninnError::UnrecognizedMessage).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tool::ToolCall;
use super::usage::ProviderUsage;
use crate::{MuninnError, Result};

/// Provider response metadata attached to a loop message.
///
/// Immutable: reading usage does not mutate the record. Use
/// [`split_usage`](Self::split_usage) to obtain the usage record together
/// with the metadata that remains once usage is taken out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMetadata(pub serde_json::Map<String, Value>);

impl ResponseMetadata {
    /// Split the `usage` record out of the metadata.
    ///
    /// Returns the remaining metadata (without the `usage` key) and the
    /// usage record, zero-filled when absent or malformed.
    pub fn split_usage(&self) -> (ResponseMetadata, ProviderUsage) {
        let mut remaining = self.0.clone();
        let usage = remaining
            .remove("usage")
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        (ResponseMetadata(remaining), usage)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tool execution result fed back into the conversation by the loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMessage {
    #[serde(default)]
    pub content: String,
    pub tool_call_id: String,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

/// Assistant turn: plain text, or a fan-out of tool calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

/// A message emitted by the reasoning loop.
///
/// Closed union: the converter matches exhaustively, and unknown kinds are
/// rejected at construction rather than smuggled through as a catch-all
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    Tool(ToolResultMessage),
    Assistant(AssistantMessage),
}

impl ChatMessage {
    /// Convenience constructor for a tool result.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        ChatMessage::Tool(ToolResultMessage {
            content: content.into(),
            tool_call_id: tool_call_id.into(),
            response_metadata: ResponseMetadata::default(),
        })
    }

    /// Convenience constructor for a plain assistant message.
    pub fn assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        ChatMessage::Assistant(AssistantMessage {
            id: Some(id.into()),
            content: content.into(),
            tool_calls: Vec::new(),
            response_metadata: ResponseMetadata::default(),
        })
    }

    /// Convenience constructor for an assistant message carrying tool calls.
    pub fn assistant_with_tool_calls(id: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        ChatMessage::Assistant(AssistantMessage {
            id: Some(id.into()),
            content: String::new(),
            tool_calls,
            response_metadata: ResponseMetadata::default(),
        })
    }

    /// Attach response metadata to the message.
    pub fn with_metadata(mut self, metadata: serde_json::Map<String, Value>) -> Self {
        match &mut self {
            ChatMessage::Tool(m) => m.response_metadata = ResponseMetadata(metadata),
            ChatMessage::Assistant(m) => m.response_metadata = ResponseMetadata(metadata),
        }
        self
    }
}

impl TryFrom<&Value> for ChatMessage {
    type Error = MuninnError;

    /// Classify a raw loop message by its `role` tag.
    ///
    /// The wildcard arm is the adapter's unrecognized-kind contract check:
    /// any role other than `tool` or `assistant` is fatal.
    fn try_from(value: &Value) -> Result<Self> {
        let role = value
            .get("role")
            .and_then(Value::as_str)
            .unwrap_or("<missing role>");
        match role {
            "tool" | "assistant" => Ok(serde_json::from_value(value.clone())?),
            other => Err(MuninnError::UnrecognizedMessage(other.to_string())),
        }
    }
}
