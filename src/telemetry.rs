//! Telemetry metric name constants.
//!
//! Centralised metric names for muninn operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `muninn_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — façade operation invoked ("predict" | "predict_stream")
//! - `status` — outcome: "ok" or "error"
//! - `direction` — token direction: "input" or "output"

/// Total predictions dispatched through the adapter.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "muninn_requests_total";

/// Prediction duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "muninn_request_duration_seconds";

/// Total tokens accounted across predictions.
///
/// Labels: `direction` ("input" | "output").
pub const TOKENS_TOTAL: &str = "muninn_tokens_total";

/// Total output items emitted, by kind.
///
/// Labels: `kind` ("function_call" | "function_call_output" | "output_text").
pub const OUTPUT_ITEMS_TOTAL: &str = "muninn_output_items_total";
