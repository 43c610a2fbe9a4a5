/*
[INPUT]:  Tool invocations from the dispatch layer
[OUTPUT]: Uniform result envelopes
[POS]:    Tool layer - surface consumed by the dispatch transport
[UPDATE]: When tools are added or their contracts change
*/

pub mod auth;
pub mod envelope;
pub mod keys;

pub use envelope::ToolResponse;

use crate::auth::AuthManager;
use crate::http::VaulticClient;
use crate::keys::KeyManager;

/// Tool-facing surface of the auth core.
///
/// Methods never fail: every error is folded into a failure envelope at
/// this boundary. The dispatch transport only serializes the result.
#[derive(Clone)]
pub struct VaulticTools {
    auth: AuthManager,
    keys: KeyManager,
}

impl VaulticTools {
    /// Build the tool surface over a shared client
    pub fn new(client: VaulticClient) -> Self {
        Self {
            auth: AuthManager::new(client.clone()),
            keys: KeyManager::new(client),
        }
    }

    /// Build the tool surface from explicit components
    pub fn with_components(auth: AuthManager, keys: KeyManager) -> Self {
        Self { auth, keys }
    }

    /// Get the auth manager
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Get the key manager
    pub fn keys(&self) -> &KeyManager {
        &self.keys
    }
}
