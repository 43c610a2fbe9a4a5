/*
[INPUT]:  API key parameters and bearer authentication
[OUTPUT]: API key records and revocation confirmations
[POS]:    HTTP layer - api-key endpoints (require auth)
[UPDATE]: When api-key endpoints or their bodies change
*/

use reqwest::Method;

use crate::http::{Result, VaulticClient};
use crate::types::{KeyCreateData, KeyListData, KeyRevokeData};

impl VaulticClient {
    /// List API keys for the authenticated identity
    ///
    /// GET /api-keys
    pub async fn list_api_keys(&self) -> Result<KeyListData> {
        let builder = self.request(Method::GET, "/api-keys")?;
        self.send_json(builder).await
    }

    /// Create a new API key
    ///
    /// POST /api-keys
    pub async fn create_api_key(
        &self,
        name: &str,
        expires_in_days: Option<i64>,
    ) -> Result<KeyCreateData> {
        let mut body = serde_json::json!({
            "name": name,
        });
        if let Some(days) = expires_in_days {
            body["expiresInDays"] = serde_json::json!(days);
        }

        let builder = self.request(Method::POST, "/api-keys")?.json(&body);
        self.send_json(builder).await
    }

    /// Revoke an API key by id
    ///
    /// DELETE /api-keys/{id}
    pub async fn revoke_api_key(&self, id: &str) -> Result<KeyRevokeData> {
        let endpoint = format!("/api-keys/{id}");
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_json(builder).await
    }
}
