/*
[INPUT]:  Auth tool arguments
[OUTPUT]: Result envelopes for the auth tools
[POS]:    Tool layer - authentication tools
[UPDATE]: When auth tools or their messages change
*/

use super::{ToolResponse, VaulticTools};
use crate::types::{CreateChallengeParams, VerifyChallengeParams};

impl VaulticTools {
    /// Tool: create-challenge
    pub async fn create_challenge(&self, params: CreateChallengeParams) -> ToolResponse {
        ToolResponse::from_result(
            "Challenge created; sign the nonce with your wallet key",
            self.auth().create_challenge(&params.wallet_address).await,
        )
    }

    /// Tool: verify-challenge
    pub async fn verify_challenge(&self, params: VerifyChallengeParams) -> ToolResponse {
        match self
            .auth()
            .verify_challenge(&params.wallet_address, &params.signature, &params.nonce)
            .await
        {
            Ok(session) => ToolResponse::ok(
                "Authentication successful",
                serde_json::json!({
                    "walletAddress": params.wallet_address,
                    "expiresAt": session.expires_at,
                }),
            ),
            Err(e) => ToolResponse::failure(&e),
        }
    }

    /// Tool: logout
    pub async fn logout(&self) -> ToolResponse {
        self.auth().logout();
        ToolResponse::ok(
            "Session cleared",
            serde_json::json!({ "authenticated": false }),
        )
    }

    /// Tool: session-status
    pub async fn session_status(&self) -> ToolResponse {
        ToolResponse::ok("Session status", self.auth().session_status())
    }
}
