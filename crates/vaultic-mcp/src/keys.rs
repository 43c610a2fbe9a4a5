/*
[INPUT]:  Key parameters and the shared session store
[OUTPUT]: Gated API key operations against the backend
[POS]:    Key management layer - long-lived credential lifecycle
[UPDATE]: When key operations or their validation rules change
*/

use tracing::info;

use crate::auth::AuthGate;
use crate::http::{Result, VaulticClient, VaulticError};
use crate::types::{ApiKey, KeyCreateData, KeyRevokeData};

/// Issues, lists, and revokes long-lived API keys.
///
/// Every operation passes the authorization gate before reaching the
/// backend. Local validation runs before the gate, so malformed input
/// is reported as `Validation` even while unauthenticated. Key expiry
/// is evaluated by the backend; nothing is auto-expired locally.
#[derive(Debug, Clone)]
pub struct KeyManager {
    client: VaulticClient,
    gate: AuthGate,
}

impl KeyManager {
    /// Create a key manager gated on the client's session store
    pub fn new(client: VaulticClient) -> Self {
        let gate = AuthGate::new(client.session().clone());
        Self { client, gate }
    }

    /// List API keys for the authenticated identity. Secrets are never
    /// part of the listing.
    ///
    /// GET /api-keys
    pub async fn list_keys(&self) -> Result<Vec<ApiKey>> {
        self.gate.require_session()?;
        let data = self.client.list_api_keys().await?;
        Ok(data.keys)
    }

    /// Create a new API key. The returned secret is shown once and
    /// cannot be retrieved again.
    ///
    /// POST /api-keys
    pub async fn create_key(
        &self,
        name: &str,
        expires_in_days: Option<i64>,
    ) -> Result<KeyCreateData> {
        if name.trim().is_empty() {
            return Err(VaulticError::Validation(
                "API key name must not be empty".to_string(),
            ));
        }
        if let Some(days) = expires_in_days {
            if days <= 0 {
                return Err(VaulticError::Validation(format!(
                    "expiresInDays must be a positive integer, got {days}"
                )));
            }
        }
        self.gate.require_session()?;

        let created = self.client.create_api_key(name, expires_in_days).await?;
        info!(key_id = %created.key.id, "API key created");
        Ok(created)
    }

    /// Revoke an API key by id. A backend 404 surfaces as the normal
    /// `NotFound` outcome, not a fault.
    ///
    /// DELETE /api-keys/{id}
    pub async fn revoke_key(&self, id: &str) -> Result<KeyRevokeData> {
        if id.trim().is_empty() {
            return Err(VaulticError::Validation(
                "API key id must not be empty".to_string(),
            ));
        }
        self.gate.require_session()?;

        let revoked = self.client.revoke_api_key(id).await?;
        info!(key_id = %revoked.id, deleted = revoked.deleted, "API key revoked");
        Ok(revoked)
    }
}
