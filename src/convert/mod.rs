//! Conversions between the serving protocol and the reasoning loop.
//!
//! Two pure translation passes live here: the request normalizer, which
//! extracts the message history and the backend-recognized generation
//! parameters from an inbound request, and the message converter, which
//! turns loop messages into typed stream events.

use serde_json::Value;
use tracing::instrument;

use crate::types::{
    AgentRequest, ChatMessage, GenerationParameters, OutputItem, StreamEvent, TokenUsage,
};
use crate::{MuninnError, Result};

/// Request fields the backend recognizes as generation parameters.
const VALID_PARAMS: [&str; 4] = ["temperature", "max_output_tokens", "top_p", "top_k"];

/// Normalize a typed request into its message history and generation
/// parameters.
///
/// Pure: the request is serialized first, so running this twice on the same
/// request yields identical results.
pub fn normalize_request(request: &AgentRequest) -> Result<(Vec<Value>, GenerationParameters)> {
    normalize_value(serde_json::to_value(request)?)
}

/// Normalize a raw request value.
///
/// Null-valued fields are dropped, `custom_inputs` entries are merged into
/// the top level, `input` becomes the message history, and the remaining
/// fields are filtered down to the recognized parameter names with
/// `max_output_tokens` carried under the backend's `max_tokens` name. All
/// other fields are silently discarded.
///
/// A `custom_inputs` key that collides with a recognized parameter name
/// overwrites it; collisions are a caller error with no stability guarantee.
#[instrument(skip(request), fields(operation = "normalize_request"))]
pub fn normalize_value(request: Value) -> Result<(Vec<Value>, GenerationParameters)> {
    let Value::Object(mut fields) = request else {
        return Err(MuninnError::InvalidInput(
            "request must be a JSON object".into(),
        ));
    };
    fields.retain(|_, v| !v.is_null());

    // Custom fields are spread into the top level before extraction.
    if let Some(custom) = fields.remove("custom_inputs") {
        let Value::Object(custom) = custom else {
            return Err(MuninnError::InvalidInput(
                "custom_inputs must be a JSON object".into(),
            ));
        };
        fields.extend(custom);
    }

    let messages = match fields.remove("input") {
        Some(Value::Array(messages)) => messages,
        Some(_) => {
            return Err(MuninnError::InvalidInput(
                "input must be an array of messages".into(),
            ));
        }
        None => return Err(MuninnError::MissingInput),
    };

    let mut params = serde_json::Map::new();
    for name in VALID_PARAMS {
        if let Some(value) = fields.remove(name) {
            params.insert(name.to_string(), value);
        }
    }
    if let Some(max) = params.remove("max_output_tokens") {
        params.insert("max_tokens".to_string(), max);
    }

    Ok((messages, serde_json::from_value(Value::Object(params))?))
}

/// Convert one batch's worth of loop messages into stream events,
/// preserving message order.
///
/// Every event is tagged as a completed item; this adapter never emits
/// partial-item events. An unrecognized message kind fails the whole
/// conversion and produces zero events.
#[instrument(skip(messages), fields(operation = "messages_to_events", count = messages.len()))]
pub fn messages_to_events(messages: &[Value]) -> Result<Vec<StreamEvent>> {
    let mut events = Vec::with_capacity(messages.len());
    for raw in messages {
        let message = ChatMessage::try_from(raw)?;
        match message {
            ChatMessage::Tool(m) => {
                let (metadata, usage) = m.response_metadata.split_usage();
                let item = OutputItem::function_call_output(m.content, m.tool_call_id);
                events.push(StreamEvent::item_done(item, usage.into(), metadata));
            }
            ChatMessage::Assistant(m) if !m.tool_calls.is_empty() => {
                let (metadata, usage) = m.response_metadata.split_usage();
                let id = m.id.unwrap_or_default();
                // The turn's usage rides on the first item only.
                let mut usage = TokenUsage::from(usage);
                for call in &m.tool_calls {
                    let item = OutputItem::function_call(
                        id.as_str(),
                        call.id.as_str(),
                        call.name.as_str(),
                        call.arguments(),
                    );
                    events.push(StreamEvent::item_done(
                        item,
                        std::mem::take(&mut usage),
                        metadata.clone(),
                    ));
                }
            }
            ChatMessage::Assistant(m) => {
                let (metadata, usage) = m.response_metadata.split_usage();
                let item = OutputItem::output_text(m.content, m.id.unwrap_or_default());
                events.push(StreamEvent::item_done(item, usage.into(), metadata));
            }
        }
    }
    Ok(events)
}
