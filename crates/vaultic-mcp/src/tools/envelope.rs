/*
[INPUT]:  Core operation results and errors
[OUTPUT]: Uniform result envelopes for the dispatch layer
[POS]:    Tool layer - response envelope
[UPDATE]: When the envelope contract changes
*/

use serde::Serialize;

use crate::http::VaulticError;

/// Uniform result envelope returned by every tool operation.
///
/// `error` carries a stable machine-readable kind for programmatic
/// branching; `message` is always human-readable. No failure crosses
/// the tool boundary as anything other than this value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ToolResponse {
    /// Success envelope with a payload and human-readable message
    pub fn ok(message: impl Into<String>, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                success: true,
                error: None,
                message: Some(message.into()),
                data: Some(value),
            },
            Err(e) => Self::failure(&VaulticError::Serialization(e)),
        }
    }

    /// Failure envelope carrying the stable kind and original message
    pub fn failure(error: &VaulticError) -> Self {
        Self {
            success: false,
            error: Some(error.kind().as_str().to_string()),
            message: Some(error.to_string()),
            data: None,
        }
    }

    /// Fold a core result into the envelope
    pub fn from_result<T: Serialize>(
        message: impl Into<String>,
        result: crate::http::Result<T>,
    ) -> Self {
        match result {
            Ok(data) => Self::ok(message, data),
            Err(e) => Self::failure(&e),
        }
    }
}
