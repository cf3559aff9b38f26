//! The reasoning-loop capability consumed by the adapter.

use async_trait::async_trait;
use futures_util::Stream;
use serde_json::Value;
use std::pin::Pin;

use crate::{GenerationParameters, Result, ToolDefinition, UpdateBatch};

/// Boxed stream of update batches from one loop run.
pub type BatchStream = Pin<Box<dyn Stream<Item = Result<UpdateBatch>> + Send>>;

/// A tool-augmented reasoning loop over a chat model.
///
/// This is an external capability: the adapter binds generation parameters
/// and hands over the fixed tool set, then pulls update batches one at a
/// time. The returned stream is finite, single-pass and not resumable;
/// calling [`run`](Self::run) again starts a fresh loop over the given
/// history. Suspension between batches happens entirely inside the backend.
///
/// Backend and tool invocation failures surface through the stream items
/// unwrapped; the adapter adds no retry or suppression.
#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    /// Drive the loop over the message history, yielding update batches in
    /// emission order.
    async fn run(
        &self,
        messages: &[Value],
        tools: &[ToolDefinition],
        params: &GenerationParameters,
    ) -> Result<BatchStream>;
}
