/*
[INPUT]:  Wallet address, signature, and nonce to verify
[OUTPUT]: Session token payload on successful verification
[POS]:    Auth layer - signature verification capability
[UPDATE]: When the verification contract or backend endpoint changes
*/

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::http::{Result, VaulticClient};
use crate::types::VerifyData;

/// Capability that validates a signature against a nonce and wallet
/// address and exchanges it for a session token.
///
/// This crate never runs the cryptographic check itself; the production
/// implementation delegates to the backend over the wire.
#[async_trait]
pub trait SignatureVerifier: Send + Sync {
    /// Verify a signed nonce and return the resulting token payload
    async fn verify(
        &self,
        wallet_address: &str,
        signature: &str,
        nonce: &str,
    ) -> Result<VerifyData>;
}

/// Backend-delegating verifier
///
/// POST /auth/verify
#[derive(Debug, Clone)]
pub struct BackendVerifier {
    client: VaulticClient,
}

impl BackendVerifier {
    /// Create a verifier that calls the backend through the given client
    pub fn new(client: VaulticClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SignatureVerifier for BackendVerifier {
    async fn verify(
        &self,
        wallet_address: &str,
        signature: &str,
        nonce: &str,
    ) -> Result<VerifyData> {
        self.client
            .verify_signature(wallet_address, signature, nonce)
            .await
    }
}

/// Mock verifier for testing: accepts anything and returns a
/// predetermined token payload.
#[derive(Debug, Clone)]
pub struct MockVerifier {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl MockVerifier {
    /// Create a mock verifier with a predetermined outcome
    pub fn new(token: &str, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            token: token.to_string(),
            expires_at,
        }
    }
}

#[async_trait]
impl SignatureVerifier for MockVerifier {
    async fn verify(
        &self,
        _wallet_address: &str,
        _signature: &str,
        _nonce: &str,
    ) -> Result<VerifyData> {
        Ok(VerifyData {
            token: self.token.clone(),
            expires_at: self.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_verifier() {
        let verifier = MockVerifier::new("tsk_mock", None);

        let verified = verifier
            .verify("0x0000000000000000000000000000000000000001", "0xsig", "abc123")
            .await
            .unwrap();

        assert_eq!(verified.token, "tsk_mock");
        assert!(verified.expires_at.is_none());
    }
}
