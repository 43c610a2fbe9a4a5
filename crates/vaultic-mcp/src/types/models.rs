/*
[INPUT]:  Backend API schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - resource models shared across endpoints
[UPDATE]: When the backend schema changes or new models are added
*/

use serde::{Deserialize, Serialize};

/// An API key record as reported by the backend.
///
/// The full secret value is never part of this model; it is returned
/// exactly once at creation time (see `KeyCreateData`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}
