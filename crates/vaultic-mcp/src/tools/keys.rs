/*
[INPUT]:  API key tool arguments
[OUTPUT]: Result envelopes for the key tools
[POS]:    Tool layer - API key tools
[UPDATE]: When key tools or their messages change
*/

use super::{ToolResponse, VaulticTools};
use crate::types::{CreateKeyParams, RevokeKeyParams};

impl VaulticTools {
    /// Tool: list-api-keys
    pub async fn list_api_keys(&self) -> ToolResponse {
        match self.keys().list_keys().await {
            Ok(keys) => ToolResponse::ok(
                format!("Found {} API key(s)", keys.len()),
                serde_json::json!({ "keys": keys }),
            ),
            Err(e) => ToolResponse::failure(&e),
        }
    }

    /// Tool: create-api-key
    pub async fn create_api_key(&self, params: CreateKeyParams) -> ToolResponse {
        ToolResponse::from_result(
            "API key created; the secret is shown once and cannot be retrieved again",
            self.keys()
                .create_key(&params.name, params.expires_in_days)
                .await,
        )
    }

    /// Tool: revoke-api-key
    pub async fn revoke_api_key(&self, params: RevokeKeyParams) -> ToolResponse {
        ToolResponse::from_result(
            "API key revoked",
            self.keys().revoke_key(&params.id).await,
        )
    }
}
