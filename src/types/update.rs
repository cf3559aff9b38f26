//! Incremental state updates emitted by the reasoning loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Partial state update of one loop node.
///
/// Messages are raw values; classification into
/// [`ChatMessage`](super::ChatMessage) happens in the converter so a
/// contract breach is reported where it is detected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeUpdate {
    #[serde(default)]
    pub messages: Vec<Value>,
}

/// One incremental update from the reasoning loop: node name to partial
/// state update. A batch usually carries a single node; multi-node batches
/// convert in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateBatch(pub BTreeMap<String, NodeUpdate>);

impl UpdateBatch {
    /// Single-node batch.
    pub fn single(node: impl Into<String>, messages: Vec<Value>) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(node.into(), NodeUpdate { messages });
        UpdateBatch(nodes)
    }

    /// All messages in the batch, in node order then message order.
    pub fn messages(&self) -> impl Iterator<Item = &Value> {
        self.0.values().flat_map(|update| update.messages.iter())
    }
}
