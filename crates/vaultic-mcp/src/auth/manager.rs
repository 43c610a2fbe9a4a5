/*
[INPUT]:  Wallet addresses, signatures, and the shared session store
[OUTPUT]: Issued challenges and an installed session token
[POS]:    Auth layer - orchestrates the challenge-response flow
[UPDATE]: When auth endpoints or flow steps change
*/

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::auth::{BackendVerifier, SessionStore, SessionToken, SignatureVerifier};
use crate::http::{Result, VaulticClient, VaulticError};
use crate::types::ChallengeData;

const WALLET_HEX_LEN: usize = 40;

/// Snapshot of the current session state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Orchestrates the wallet challenge-response flow.
///
/// 1. `create_challenge` fetches a nonce for the wallet address
/// 2. The caller signs the nonce off-path with their wallet key
/// 3. `verify_challenge` submits the signature and installs the
///    resulting session token as the process bearer credential
#[derive(Clone)]
pub struct AuthManager {
    client: VaulticClient,
    session: SessionStore,
    verifier: Arc<dyn SignatureVerifier>,
}

impl AuthManager {
    /// Create a manager that verifies signatures through the backend
    pub fn new(client: VaulticClient) -> Self {
        let verifier = Arc::new(BackendVerifier::new(client.clone()));
        Self::with_verifier(client, verifier)
    }

    /// Create a manager with an explicit verification capability
    pub fn with_verifier(client: VaulticClient, verifier: Arc<dyn SignatureVerifier>) -> Self {
        let session = client.session().clone();
        Self {
            client,
            session,
            verifier,
        }
    }

    /// Get the session store shared with this manager
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Request a challenge nonce for a wallet address.
    ///
    /// The address must be a 0x-prefixed 40-character hex string;
    /// malformed input fails as `Validation` without contacting the
    /// backend. The challenge is backend-owned and nothing is stored
    /// locally.
    ///
    /// POST /auth/challenge
    pub async fn create_challenge(&self, wallet_address: &str) -> Result<ChallengeData> {
        validate_wallet_address(wallet_address)?;

        let challenge = self.client.create_challenge(wallet_address).await?;
        debug!(wallet = %wallet_address, "challenge issued");
        Ok(challenge)
    }

    /// Submit a signed nonce and install the resulting session token.
    ///
    /// Preconditions are checked in order - wallet format, non-empty
    /// signature, non-empty nonce - each failing as `Validation` before
    /// any backend call. On backend-reported failure the session store
    /// is left untouched. Nonces are single-use: after a failure,
    /// request a fresh challenge instead of resubmitting the same one.
    ///
    /// POST /auth/verify
    pub async fn verify_challenge(
        &self,
        wallet_address: &str,
        signature: &str,
        nonce: &str,
    ) -> Result<SessionToken> {
        validate_wallet_address(wallet_address)?;
        if signature.trim().is_empty() {
            return Err(VaulticError::Validation(
                "signature must not be empty".to_string(),
            ));
        }
        if nonce.trim().is_empty() {
            return Err(VaulticError::Validation(
                "nonce must not be empty".to_string(),
            ));
        }

        let verified = self
            .verifier
            .verify(wallet_address, signature, nonce)
            .await?;

        self.session
            .set(verified.token.clone(), verified.expires_at);
        info!(wallet = %wallet_address, "session established");

        Ok(SessionToken {
            token: verified.token,
            expires_at: verified.expires_at,
        })
    }

    /// Drop the current session token, if any
    pub fn logout(&self) {
        self.session.clear();
        info!("session cleared");
    }

    /// Report whether a valid session is currently held
    pub fn session_status(&self) -> SessionStatus {
        let authenticated = self.session.is_valid();
        let expires_at = if authenticated {
            self.session.token_data().and_then(|data| data.expires_at)
        } else {
            None
        };
        SessionStatus {
            authenticated,
            expires_at,
        }
    }
}

fn is_wallet_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == WALLET_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

fn validate_wallet_address(address: &str) -> Result<()> {
    if is_wallet_address(address) {
        Ok(())
    } else {
        Err(VaulticError::Validation(format!(
            "invalid wallet address '{address}': expected a 0x-prefixed 40-character hex string"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Duration;
    use rstest::rstest;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::auth::MockVerifier;
    use crate::http::ClientConfig;
    use crate::types::VerifyData;

    const WALLET: &str = "0x1111111111111111111111111111111111111111";

    /// Verifier that always reports a backend rejection
    struct DenyingVerifier;

    #[async_trait]
    impl SignatureVerifier for DenyingVerifier {
        async fn verify(&self, _: &str, _: &str, _: &str) -> Result<VerifyData> {
            Err(VaulticError::Api {
                status: 401,
                message: "invalid signature".to_string(),
            })
        }
    }

    fn manager_with(verifier: Arc<dyn SignatureVerifier>) -> AuthManager {
        let session = SessionStore::new();
        let client = VaulticClient::new(session).unwrap();
        AuthManager::with_verifier(client, verifier)
    }

    #[rstest]
    #[case::valid_lowercase("0x1111111111111111111111111111111111111111", true)]
    #[case::valid_mixed_case("0xAbCdEf1234567890aBcDeF1234567890abcdef12", true)]
    #[case::missing_prefix("1111111111111111111111111111111111111111", false)]
    #[case::too_short("0x111111111111111111111111111111111111111", false)]
    #[case::too_long("0x11111111111111111111111111111111111111111", false)]
    #[case::non_hex("0x111111111111111111111111111111111111111g", false)]
    #[case::empty("", false)]
    #[case::bare_prefix("0x", false)]
    fn test_wallet_address_format(#[case] address: &str, #[case] expected: bool) {
        assert_eq!(is_wallet_address(address), expected);
    }

    #[tokio::test]
    async fn test_create_challenge_rejects_malformed_address() {
        let manager = manager_with(Arc::new(MockVerifier::new("tsk", None)));

        let err = manager.create_challenge("0xnot-a-wallet").await.unwrap_err();
        assert!(matches!(err, VaulticError::Validation(_)));
    }

    #[tokio::test]
    async fn test_verify_challenge_precondition_order() {
        let manager = manager_with(Arc::new(MockVerifier::new("tsk", None)));

        // Malformed wallet wins over empty signature
        let err = manager.verify_challenge("bogus", "", "abc").await.unwrap_err();
        assert!(err.to_string().contains("wallet address"));

        let err = manager.verify_challenge(WALLET, "", "abc").await.unwrap_err();
        assert!(err.to_string().contains("signature"));

        let err = manager.verify_challenge(WALLET, "0xsig", "").await.unwrap_err();
        assert!(err.to_string().contains("nonce"));

        assert!(!manager.session().is_valid());
    }

    #[tokio::test]
    async fn test_verify_challenge_installs_token() {
        let expires_at = Utc::now() + Duration::seconds(3600);
        let manager = manager_with(Arc::new(MockVerifier::new("tsk_1", Some(expires_at))));

        let session = manager
            .verify_challenge(WALLET, "0xsig", "abc123")
            .await
            .unwrap();

        assert_eq!(session.token, "tsk_1");
        assert!(manager.session().is_valid());
        assert_eq!(manager.session().bearer(), Some("tsk_1".to_string()));
    }

    #[tokio::test]
    async fn test_verify_challenge_replaces_prior_token() {
        let manager = manager_with(Arc::new(MockVerifier::new("tsk_new", None)));
        manager.session().set("tsk_old".to_string(), None);

        manager
            .verify_challenge(WALLET, "0xsig", "abc123")
            .await
            .unwrap();

        assert_eq!(manager.session().get(), Some("tsk_new".to_string()));
    }

    #[tokio::test]
    async fn test_failed_verification_leaves_store_untouched() {
        let manager = manager_with(Arc::new(DenyingVerifier));

        let err = manager
            .verify_challenge(WALLET, "0xsig", "abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, VaulticError::Api { status: 401, .. }));
        assert!(manager.session().get().is_none());
        assert!(!manager.session().is_valid());
    }

    #[tokio::test]
    async fn test_logout_and_status() {
        let manager = manager_with(Arc::new(MockVerifier::new("tsk_1", None)));

        assert!(!manager.session_status().authenticated);

        manager
            .verify_challenge(WALLET, "0xsig", "abc123")
            .await
            .unwrap();
        assert!(manager.session_status().authenticated);

        manager.logout();
        let status = manager.session_status();
        assert!(!status.authenticated);
        assert!(status.expires_at.is_none());
    }

    #[tokio::test]
    async fn test_challenge_and_verify_happy_path_against_backend() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/challenge"))
            .and(body_json(serde_json::json!({ "walletAddress": WALLET })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "nonce": "abc123",
                "expiresIn": 300,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let expires_at = (Utc::now() + Duration::seconds(3600)).to_rfc3339();
        Mock::given(method("POST"))
            .and(path("/auth/verify"))
            .and(body_json(serde_json::json!({
                "walletAddress": WALLET,
                "signature": "0xsig",
                "nonce": "abc123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "tsk_1",
                "expiresAt": expires_at,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::new();
        let client = VaulticClient::with_config_and_base_url(
            ClientConfig::default(),
            &server.uri(),
            session,
        )
        .unwrap();
        let manager = AuthManager::new(client);

        let challenge = manager.create_challenge(WALLET).await.unwrap();
        assert_eq!(challenge.nonce, "abc123");
        assert_eq!(challenge.expires_in, Some(300));
        // Challenge issuance mutates no local state
        assert!(!manager.session().is_valid());

        let token = manager
            .verify_challenge(WALLET, "0xsig", &challenge.nonce)
            .await
            .unwrap();
        assert_eq!(token.token, "tsk_1");
        assert!(manager.session().is_valid());
    }
}
