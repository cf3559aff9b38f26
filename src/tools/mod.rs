//! Tools the reasoning loop can call.
//!
//! The adapter never invokes tools itself; it supplies their definitions to
//! the backend, which calls them by name with string-serialized arguments.

mod catalog;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::types::ToolDefinition;
use crate::{MuninnError, Result};

pub use catalog::{HttpToolCatalog, ToolCatalog};

/// A named callable capability with a description and typed arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Definition advertised to the model.
    fn definition(&self) -> ToolDefinition;

    /// Invoke the tool with string-serialized JSON arguments.
    async fn call(&self, arguments: &str) -> Result<String>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.definition().name)
            .finish_non_exhaustive()
    }
}

/// Fixed local weather lookup. Returns a canned string; exists so the tool
/// path works end to end without any external catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherTool;

#[derive(Deserialize)]
struct WeatherArgs {
    city: String,
}

#[async_trait]
impl Tool for WeatherTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_weather",
            "Get the weather for a city",
            json!({
                "type": "object",
                "properties": {
                    "city": { "type": "string", "description": "City name" }
                },
                "required": ["city"]
            }),
        )
    }

    async fn call(&self, arguments: &str) -> Result<String> {
        let args: WeatherArgs = serde_json::from_str(arguments)
            .map_err(|e| MuninnError::Tool(format!("get_weather: bad arguments: {e}")))?;
        Ok(format!("It's always sunny in {}!", args.city))
    }
}

/// Match a tool name against a catalog wildcard pattern.
///
/// Only a trailing `*` is supported (e.g. `system.ai.*`); a pattern without
/// one matches exactly.
pub(crate) fn wildcard_match(pattern: &str, name: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => name.starts_with(prefix),
        None => pattern == name,
    }
}
