//! Token usage accounting types

use serde::{Deserialize, Serialize};

/// Usage record in the provider's key scheme, as found under the `usage`
/// key of a message's response metadata. Missing keys default to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Standardized per-event usage snapshot.
///
/// The key translation from [`ProviderUsage`] maps `prompt_tokens` →
/// `input_tokens` and `completion_tokens` → `output_tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl TokenUsage {
    /// True when every count is zero.
    pub fn is_zero(&self) -> bool {
        self.input_tokens == 0 && self.output_tokens == 0 && self.total_tokens == 0
    }
}

impl From<ProviderUsage> for TokenUsage {
    fn from(usage: ProviderUsage) -> Self {
        Self {
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Cached-token detail of the aggregated usage shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTokensDetails {
    #[serde(default)]
    pub cached_tokens: u64,
}

/// Reasoning-token detail of the aggregated usage shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTokensDetails {
    #[serde(default)]
    pub reasoning_tokens: u64,
}

/// Fixed-shape usage accumulator for one prediction.
///
/// Starts zero-filled and sums per-event snapshots key by key; a key absent
/// from a snapshot contributes 0. The detail sub-records are part of the
/// response contract and stay zero until a backend reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTotals {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub input_tokens_details: InputTokensDetails,
    pub output_tokens_details: OutputTokensDetails,
}

impl UsageTotals {
    /// Fold a snapshot into the totals.
    pub fn add(&mut self, snapshot: &TokenUsage) {
        self.input_tokens += snapshot.input_tokens;
        self.output_tokens += snapshot.output_tokens;
        self.total_tokens += snapshot.total_tokens;
    }

    /// Sum a sequence of snapshots from a zero-filled shape.
    pub fn accumulate<'a>(snapshots: impl IntoIterator<Item = &'a TokenUsage>) -> Self {
        let mut totals = Self::default();
        for snapshot in snapshots {
            totals.add(snapshot);
        }
        totals
    }
}
