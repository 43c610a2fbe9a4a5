/*
[INPUT]:  Wallet addresses, signatures, and nonces
[OUTPUT]: Challenge and verification payloads from the backend
[POS]:    HTTP layer - authentication endpoints
[UPDATE]: When auth endpoints or their bodies change
*/

use reqwest::Method;

use crate::http::{Result, VaulticClient};
use crate::types::{ChallengeData, VerifyData};

impl VaulticClient {
    /// Request a signing challenge for a wallet address
    ///
    /// POST /auth/challenge
    pub async fn create_challenge(&self, wallet_address: &str) -> Result<ChallengeData> {
        let body = serde_json::json!({
            "walletAddress": wallet_address,
        });

        let builder = self.request(Method::POST, "/auth/challenge")?.json(&body);
        self.send_json(builder).await
    }

    /// Submit a signed nonce for verification
    ///
    /// POST /auth/verify
    pub async fn verify_signature(
        &self,
        wallet_address: &str,
        signature: &str,
        nonce: &str,
    ) -> Result<VerifyData> {
        let body = serde_json::json!({
            "walletAddress": wallet_address,
            "signature": signature,
            "nonce": nonce,
        });

        let builder = self.request(Method::POST, "/auth/verify")?.json(&body);
        self.send_json(builder).await
    }
}
