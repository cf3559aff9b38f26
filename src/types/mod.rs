//! Public types for the muninn API.

mod event;
mod item;
mod message;
mod request;
mod tool;
mod update;
mod usage;

pub use event::{AgentResponse, StreamEvent, StreamEventType};
pub use item::OutputItem;
pub use message::{AssistantMessage, ChatMessage, ResponseMetadata, ToolResultMessage};
pub use request::{AgentRequest, GenerationParameters};
pub use tool::{ToolCall, ToolDefinition};
pub use update::{NodeUpdate, UpdateBatch};
pub use usage::{InputTokensDetails, OutputTokensDetails, ProviderUsage, TokenUsage, UsageTotals};
