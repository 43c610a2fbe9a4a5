/*
[INPUT]:  Tool argument JSON from the dispatch layer
[OUTPUT]: Typed parameter structs for tool methods
[POS]:    Data layer - inbound tool argument shapes
[UPDATE]: When a tool gains or changes arguments
*/

use serde::{Deserialize, Serialize};

/// Arguments for the create-challenge tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeParams {
    pub wallet_address: String,
}

/// Arguments for the verify-challenge tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyChallengeParams {
    pub wallet_address: String,
    pub signature: String,
    pub nonce: String,
}

/// Arguments for the create-api-key tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyParams {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<i64>,
}

/// Arguments for the revoke-api-key tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokeKeyParams {
    pub id: String,
}
