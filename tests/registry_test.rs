use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream;
use serde_json::Value;

use muninn::{
    BatchStream, GenerationParameters, ModelRegistry, MuninnError, ReasoningBackend,
    ResponsesAgent, Result, Tool, ToolCatalog, ToolDefinition,
};

struct EmptyBackend;

#[async_trait]
impl ReasoningBackend for EmptyBackend {
    async fn run(
        &self,
        _messages: &[Value],
        _tools: &[ToolDefinition],
        _params: &GenerationParameters,
    ) -> Result<BatchStream> {
        Ok(Box::pin(stream::empty()))
    }
}

struct EmptyCatalog;

#[async_trait]
impl ToolCatalog for EmptyCatalog {
    async fn resolve(&self, _pattern: &str) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(Vec::new())
    }
}

struct FailingCatalog;

#[async_trait]
impl ToolCatalog for FailingCatalog {
    async fn resolve(&self, _pattern: &str) -> Result<Vec<Arc<dyn Tool>>> {
        Err(MuninnError::Http("connection refused".into()))
    }
}

#[test]
fn test_registry_starts_empty() {
    let registry = ModelRegistry::new();
    assert!(registry.model().is_none());
}

#[test]
fn test_register_once_then_resolve() {
    let registry = ModelRegistry::new();
    let agent = Arc::new(ResponsesAgent::new(Arc::new(EmptyBackend), Vec::new()));

    registry.register(agent.clone()).unwrap();
    assert!(registry.model().is_some());
}

#[test]
fn test_double_registration_is_rejected() {
    let registry = ModelRegistry::new();
    let agent = Arc::new(ResponsesAgent::new(Arc::new(EmptyBackend), Vec::new()));

    registry.register(agent.clone()).unwrap();
    let err = registry.register(agent).unwrap_err();
    assert!(matches!(err, MuninnError::AlreadyRegistered));
}

#[tokio::test]
async fn test_bootstrap_builds_weather_plus_catalog_tools() {
    let registry = ModelRegistry::new();
    let agent = muninn::bootstrap(&registry, Arc::new(EmptyBackend), &EmptyCatalog)
        .await
        .unwrap();

    let names: Vec<String> = agent
        .tools()
        .iter()
        .map(|t| t.definition().name)
        .collect();
    assert_eq!(names, ["get_weather"]);
    assert!(registry.model().is_some());
}

#[tokio::test]
async fn test_bootstrap_propagates_catalog_failure() {
    let registry = ModelRegistry::new();
    let err = muninn::bootstrap(&registry, Arc::new(EmptyBackend), &FailingCatalog)
        .await
        .unwrap_err();
    assert!(matches!(err, MuninnError::Http(_)));
    assert!(registry.model().is_none());
}
