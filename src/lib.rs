//! Muninn - Responses-protocol adapter for tool-calling chat agents
//!
//! This crate bridges a chat-style language-model backend, driven through an
//! external tool-augmented reasoning loop, to the Responses request/response
//! streaming protocol used by a model-serving platform: it normalizes an
//! inbound request, pulls incremental message batches from the loop, and
//! translates them into typed output-item events while aggregating
//! token-usage accounting.
//!
//! The loop itself is an external capability behind [`ReasoningBackend`];
//! muninn only configures and iterates it.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use muninn::{AgentRequest, ModelRegistry, ReasoningBackend, HttpToolCatalog};
//! use serde_json::json;
//!
//! # async fn run(backend: Arc<dyn ReasoningBackend>) -> muninn::Result<()> {
//! let registry = ModelRegistry::new();
//! let catalog = HttpToolCatalog::new("https://catalog.example.com");
//! let agent = muninn::bootstrap(&registry, backend, &catalog).await?;
//!
//! let request = AgentRequest::new(vec![json!({
//!     "role": "user",
//!     "content": "What's the weather in Oslo?"
//! })])
//! .temperature(0.1);
//!
//! let response = agent.predict(&request).await?;
//! println!("{}", serde_json::to_string_pretty(&response.output)?);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod convert;
pub mod error;
pub mod registry;
pub mod telemetry;
pub mod tools;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use agent::{EventStream, ResponsesAgent};
pub use error::{MuninnError, Result};
pub use registry::{CATALOG_PATTERN, DEFAULT_ENDPOINT, ModelRegistry, bootstrap};
pub use tools::{HttpToolCatalog, Tool, ToolCatalog, WeatherTool};
pub use traits::{BatchStream, ReasoningBackend};

// Re-export all types
pub use types::{
    AgentRequest, AgentResponse, AssistantMessage, ChatMessage, GenerationParameters,
    InputTokensDetails, NodeUpdate, OutputItem, OutputTokensDetails, ProviderUsage,
    ResponseMetadata, StreamEvent, StreamEventType, TokenUsage, ToolCall, ToolDefinition,
    ToolResultMessage, UpdateBatch, UsageTotals,
};
