//! Inbound request and generation parameter types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A prediction request from the serving platform.
///
/// Carries the ordered conversation history (`input`), the recognized
/// generation parameters, and an open-ended bag of custom fields. Treated
/// as immutable once received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRequest {
    /// Ordered input messages, passed through to the reasoning loop as-is.
    pub input: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u64>,
    /// Caller-supplied custom fields, merged into the top level during
    /// normalization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_inputs: Option<serde_json::Map<String, Value>>,
}

impl AgentRequest {
    /// Create a request from a message list.
    pub fn new(input: Vec<Value>) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_output_tokens(mut self, max: u64) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }

    pub fn top_k(mut self, k: u64) -> Self {
        self.top_k = Some(k);
        self
    }

    pub fn custom_input(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_inputs
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value);
        self
    }
}

/// The backend-recognized subset of request parameters.
///
/// Produced by the request normalizer: unrecognized request fields are
/// dropped, and the protocol's `max_output_tokens` is carried under the
/// backend's `max_tokens` name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u64>,
}

impl GenerationParameters {
    /// True when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.max_tokens.is_none()
            && self.top_p.is_none()
            && self.top_k.is_none()
    }
}
