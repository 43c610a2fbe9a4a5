/*
[INPUT]:  Backend JSON response bodies
[OUTPUT]: Typed response structs for endpoint decoding
[POS]:    Data layer - outbound backend response shapes
[UPDATE]: When a backend endpoint changes its response body
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::ApiKey;

/// Response from `POST /auth/challenge`.
///
/// Backend-owned; the core echoes the nonce back on verification and
/// treats everything else as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeData {
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Response from `POST /auth/verify`.
///
/// `expires_at` must be comparable against the clock, so it is decoded
/// into an instant rather than kept as an opaque string. Absent means
/// the token never expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyData {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response from `GET /api-keys`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyListData {
    pub keys: Vec<ApiKey>,
}

/// Response from `POST /api-keys`.
///
/// `secret_key` is the one-time secret; it is handed to the caller and
/// never stored or re-exposed by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCreateData {
    pub key: ApiKey,
    pub secret_key: String,
}

/// Response from `DELETE /api-keys/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRevokeData {
    pub id: String,
    pub deleted: bool,
}
