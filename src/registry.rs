//! Model registration for the hosting runtime.
//!
//! The hosting entry point constructs the registry, bootstraps the agent
//! once, and keeps both for the lifetime of the process. There is no
//! ambient global: whoever serves predictions owns the registry and looks
//! the model up through it.

use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::agent::ResponsesAgent;
use crate::tools::{Tool, ToolCatalog, WeatherTool};
use crate::traits::ReasoningBackend;
use crate::{MuninnError, Result};

/// The fixed model endpoint the adapter is built against. Per-request
/// influence is limited to the recognized generation parameters.
pub const DEFAULT_ENDPOINT: &str = "databricks-meta-llama-3-1-405b-instruct";

/// Wildcard pattern for external catalog tools discovered at process start.
pub const CATALOG_PATTERN: &str = "system.ai.*";

/// Set-once slot the hosting runtime resolves "the model" through.
///
/// Registration happens once at process start and lasts for the process
/// lifetime; there is no teardown.
#[derive(Default)]
pub struct ModelRegistry {
    model: OnceLock<Arc<ResponsesAgent>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the agent as the served model. Fails if a model is already
    /// registered.
    pub fn register(&self, agent: Arc<ResponsesAgent>) -> Result<()> {
        self.model
            .set(agent)
            .map_err(|_| MuninnError::AlreadyRegistered)?;
        info!("model registered");
        Ok(())
    }

    /// The registered model, if any.
    pub fn model(&self) -> Option<Arc<ResponsesAgent>> {
        self.model.get().cloned()
    }
}

/// Assemble the agent and hand it to the registry.
///
/// Builds the fixed tool set (the local weather tool plus every catalog
/// tool matching [`CATALOG_PATTERN`]), constructs the agent over the given
/// backend, and registers it. Invoked once by the hosting entry point.
pub async fn bootstrap(
    registry: &ModelRegistry,
    backend: Arc<dyn ReasoningBackend>,
    catalog: &dyn ToolCatalog,
) -> Result<Arc<ResponsesAgent>> {
    let mut tools: Vec<Arc<dyn Tool>> = vec![Arc::new(WeatherTool)];
    tools.extend(catalog.resolve(CATALOG_PATTERN).await?);
    info!(
        endpoint = DEFAULT_ENDPOINT,
        tool_count = tools.len(),
        "bootstrapping agent"
    );

    let agent = Arc::new(ResponsesAgent::new(backend, tools));
    registry.register(agent.clone())?;
    Ok(agent)
}
