//! The adapter façade: predict and predict_stream.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use futures_util::{Stream, StreamExt, future, stream};
use tracing::instrument;

use crate::convert::{messages_to_events, normalize_request};
use crate::telemetry;
use crate::tools::Tool;
use crate::traits::ReasoningBackend;
use crate::types::{AgentRequest, AgentResponse, StreamEvent, ToolDefinition, UsageTotals};
use crate::Result;

/// Boxed stream of response events from one prediction.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;

/// Bridges a tool-augmented reasoning loop to the Responses protocol.
///
/// Read-only after construction: the backend handle and tool set never
/// change, so the agent can serve successive predictions. Sharing one agent
/// across concurrent predictions is safe exactly when the backend is; the
/// adapter itself holds no mutable state.
///
/// The adapter performs no failure recovery. Normalization and conversion
/// errors propagate to the caller, and backend or tool failures surface
/// through the stream unwrapped.
pub struct ResponsesAgent {
    backend: Arc<dyn ReasoningBackend>,
    tools: Vec<Arc<dyn Tool>>,
    definitions: Vec<ToolDefinition>,
}

impl std::fmt::Debug for ResponsesAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsesAgent")
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}

impl ResponsesAgent {
    /// Create an agent over a backend and a fixed tool set.
    pub fn new(backend: Arc<dyn ReasoningBackend>, tools: Vec<Arc<dyn Tool>>) -> Self {
        let definitions = tools.iter().map(|tool| tool.definition()).collect();
        Self {
            backend,
            tools,
            definitions,
        }
    }

    /// The tools advertised to the reasoning loop.
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Run one prediction and collect the full response.
    ///
    /// Drains [`predict_stream`](Self::predict_stream), keeps completed-item
    /// events (currently all events; the filter anticipates partial-event
    /// types), collects their items in order, and sums usage snapshots into
    /// a zero-initialized [`UsageTotals`]. Any error aborts the prediction
    /// with no partial result.
    #[instrument(skip(self, request), fields(operation = "predict"))]
    pub async fn predict(&self, request: &AgentRequest) -> Result<AgentResponse> {
        let start = Instant::now();
        let result = self.drain(request).await;
        record_request("predict", start, result.is_ok());
        result
    }

    async fn drain(&self, request: &AgentRequest) -> Result<AgentResponse> {
        let mut events = self.predict_stream(request).await?;

        let mut output = Vec::new();
        let mut usage = UsageTotals::default();
        while let Some(event) = events.next().await {
            let event = event?;
            if !event.is_done() {
                continue;
            }
            usage.add(&event.usage);
            metrics::counter!(telemetry::OUTPUT_ITEMS_TOTAL, "kind" => event.item.kind())
                .increment(1);
            output.push(event.item);
        }

        record_token_usage(&usage);
        Ok(AgentResponse { output, usage })
    }

    /// Run one prediction as a lazy event stream.
    ///
    /// Normalizes the request, hands the history and bound parameters to
    /// the backend, and converts each update batch into events, preserving
    /// batch order and, within a batch, message order. The stream is
    /// single-pass and not restartable; after an error it yields nothing
    /// further, but events already pulled are not recalled.
    #[instrument(skip(self, request), fields(operation = "predict_stream"))]
    pub async fn predict_stream(&self, request: &AgentRequest) -> Result<EventStream> {
        let (messages, params) = normalize_request(request)?;
        let batches = self
            .backend
            .run(&messages, &self.definitions, &params)
            .await?;

        let events = batches
            .map(|batch| {
                batch.and_then(|batch| {
                    let messages: Vec<_> = batch.messages().cloned().collect();
                    messages_to_events(&messages)
                })
            })
            .flat_map(|converted| match converted {
                Ok(events) => stream::iter(events).map(Ok).left_stream(),
                Err(err) => stream::once(future::ready(Err(err))).right_stream(),
            })
            .scan(false, |failed, item| {
                // Terminate after the first error; conversion errors are fatal.
                if *failed {
                    return future::ready(None);
                }
                *failed = item.is_err();
                future::ready(Some(item))
            });

        Ok(Box::pin(events))
    }
}

/// Record request outcome metrics (counter + histogram).
fn record_request(operation: &'static str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(elapsed);
}

/// Record aggregated token usage for one prediction.
fn record_token_usage(usage: &UsageTotals) {
    metrics::counter!(telemetry::TOKENS_TOTAL, "direction" => "input").increment(usage.input_tokens);
    metrics::counter!(telemetry::TOKENS_TOTAL, "direction" => "output")
        .increment(usage.output_tokens);
}
