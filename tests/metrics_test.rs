//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use serde_json::{Value, json};

use muninn::{
    AgentRequest, BatchStream, GenerationParameters, ReasoningBackend, ResponsesAgent, Result,
    ToolDefinition, UpdateBatch, telemetry,
};

struct TextBackend;

#[async_trait]
impl ReasoningBackend for TextBackend {
    async fn run(
        &self,
        _messages: &[Value],
        _tools: &[ToolDefinition],
        _params: &GenerationParameters,
    ) -> Result<BatchStream> {
        let batch = UpdateBatch::single(
            "agent",
            vec![json!({
                "role": "assistant",
                "id": "m1",
                "content": "hello",
                "response_metadata": {
                    "usage": {"prompt_tokens": 6, "completion_tokens": 2, "total_tokens": 8}
                }
            })],
        );
        Ok(Box::pin(stream::iter(vec![Ok(batch)])))
    }
}

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn predict_records_request_and_token_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let agent = ResponsesAgent::new(Arc::new(TextBackend), Vec::new());
                let request = AgentRequest::new(vec![json!({"role": "user", "content": "hi"})]);
                agent.predict(&request).await
            })
        })
    });
    assert!(result.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();

    assert_eq!(counter_total(&snapshot, telemetry::REQUESTS_TOTAL), 1);
    assert_eq!(counter_total(&snapshot, telemetry::TOKENS_TOTAL), 8);
    assert_eq!(counter_total(&snapshot, telemetry::OUTPUT_ITEMS_TOTAL), 1);
    assert!(has_histogram(&snapshot, telemetry::REQUEST_DURATION_SECONDS));
}
