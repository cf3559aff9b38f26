//! Output items: the structured units of model output.

use serde::{Deserialize, Serialize};

/// One structured unit of model output, tagged by `type` on the wire.
///
/// The `content` field on the function variants duplicates another field
/// (`output` and `name` respectively) for consumers that predate the typed
/// item schema and only read `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// Result of a tool invocation, keyed back to its call.
    FunctionCallOutput {
        output: String,
        call_id: String,
        content: String,
    },
    /// A tool call requested by the model.
    FunctionCall {
        id: String,
        call_id: String,
        name: String,
        arguments: String,
        content: String,
    },
    /// Plain text output.
    OutputText { text: String, id: String },
}

impl OutputItem {
    /// Build a function-call-output item, mirroring `output` into `content`.
    pub fn function_call_output(output: impl Into<String>, call_id: impl Into<String>) -> Self {
        let output = output.into();
        OutputItem::FunctionCallOutput {
            content: output.clone(),
            output,
            call_id: call_id.into(),
        }
    }

    /// Build a function-call item, mirroring `name` into `content`.
    pub fn function_call(
        id: impl Into<String>,
        call_id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        let name = name.into();
        OutputItem::FunctionCall {
            id: id.into(),
            call_id: call_id.into(),
            content: name.clone(),
            name,
            arguments: arguments.into(),
        }
    }

    /// Build a text-output item.
    pub fn output_text(text: impl Into<String>, id: impl Into<String>) -> Self {
        OutputItem::OutputText {
            text: text.into(),
            id: id.into(),
        }
    }

    /// Wire-level kind tag, also used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            OutputItem::FunctionCallOutput { .. } => "function_call_output",
            OutputItem::FunctionCall { .. } => "function_call",
            OutputItem::OutputText { .. } => "output_text",
        }
    }
}
