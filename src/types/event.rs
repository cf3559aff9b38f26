//! Stream events and the non-streaming response envelope.

use serde::{Deserialize, Serialize};

use super::item::OutputItem;
use super::message::ResponseMetadata;
use super::usage::{TokenUsage, UsageTotals};

/// Completion marker of a stream event.
///
/// This adapter only ever emits completed items; word-level partial events
/// would be possible over a token-streaming backend but are deliberately
/// not produced. The enum is non-exhaustive so partial variants can be added
/// without breaking the drain filter in `predict`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StreamEventType {
    #[default]
    #[serde(rename = "response.output_item.done")]
    OutputItemDone,
}

/// One typed event of the streaming response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "type")]
    pub event_type: StreamEventType,
    pub item: OutputItem,
    /// Usage snapshot for this event. Within one assistant turn that fans
    /// out to several items, only the first event carries the turn's usage.
    pub usage: TokenUsage,
    /// Provider metadata with the usage record already split out.
    pub metadata: ResponseMetadata,
}

impl StreamEvent {
    /// Wrap an item as a completed-item event.
    pub fn item_done(item: OutputItem, usage: TokenUsage, metadata: ResponseMetadata) -> Self {
        Self {
            event_type: StreamEventType::OutputItemDone,
            item,
            usage,
            metadata,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.event_type, StreamEventType::OutputItemDone)
    }
}

/// Non-streaming response: all output items plus aggregated usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub output: Vec<OutputItem>,
    pub usage: UsageTotals,
}
