//! External tool catalog discovery.
//!
//! The hosting platform exposes a catalog of callable functions; the
//! adapter resolves a wildcard name pattern against it once at process
//! start and advertises the matches alongside the local tools.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use super::{Tool, wildcard_match};
use crate::types::ToolDefinition;
use crate::{MuninnError, Result};

/// A source of tools resolvable by a wildcard name pattern.
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    /// Resolve every catalog function whose name matches the pattern.
    async fn resolve(&self, pattern: &str) -> Result<Vec<Arc<dyn Tool>>>;
}

/// One function entry in the catalog's listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFunction {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ListFunctionsResponse {
    #[serde(default)]
    functions: Vec<CatalogFunction>,
}

/// HTTP-backed tool catalog.
///
/// Lists `{base}/api/functions` and turns every matching entry into a tool
/// whose invocation posts the string-serialized arguments to
/// `{base}/api/functions/{name}/invoke`.
#[derive(Clone)]
pub struct HttpToolCatalog {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpToolCatalog {
    /// Create a catalog client for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Set a bearer token for catalog requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(MuninnError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ToolCatalog for HttpToolCatalog {
    #[instrument(skip(self), fields(operation = "resolve_catalog"))]
    async fn resolve(&self, pattern: &str) -> Result<Vec<Arc<dyn Tool>>> {
        let url = format!("{}/api/functions", self.base_url);
        let response = self.authorize(self.http.get(&url)).send().await?;
        let listing: ListFunctionsResponse = Self::check_status(response).await?.json().await?;

        let tools = listing
            .functions
            .into_iter()
            .filter(|f| wildcard_match(pattern, &f.name))
            .map(|function| {
                Arc::new(RemoteTool {
                    catalog: self.clone(),
                    function,
                }) as Arc<dyn Tool>
            })
            .collect();
        Ok(tools)
    }
}

/// A catalog function exposed as a locally callable tool.
struct RemoteTool {
    catalog: HttpToolCatalog,
    function: CatalogFunction,
}

#[async_trait]
impl Tool for RemoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            &self.function.name,
            &self.function.description,
            self.function
                .parameters
                .clone()
                .unwrap_or_else(|| json!({ "type": "object", "properties": {} })),
        )
    }

    async fn call(&self, arguments: &str) -> Result<String> {
        let url = format!(
            "{}/api/functions/{}/invoke",
            self.catalog.base_url, self.function.name
        );
        let response = self
            .catalog
            .authorize(self.catalog.http.post(&url))
            .json(&json!({ "arguments": arguments }))
            .send()
            .await?;
        let body: Value = HttpToolCatalog::check_status(response).await?.json().await?;
        match body.get("output") {
            Some(Value::String(output)) => Ok(output.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(MuninnError::Tool(format!(
                "{}: invoke response has no output",
                self.function.name
            ))),
        }
    }
}
