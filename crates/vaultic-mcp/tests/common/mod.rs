/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for vaultic-mcp tests

use vaultic_mcp::{ClientConfig, SessionStore, VaulticClient, VaulticTools};
use wiremock::MockServer;

/// A well-formed wallet address used throughout the suites
#[allow(dead_code)]
pub const WALLET: &str = "0x1111111111111111111111111111111111111111";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a tool surface wired against the given mock server
pub fn tools_for(server: &MockServer) -> VaulticTools {
    let session = SessionStore::new();
    let client =
        VaulticClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), session)
            .expect("client init");
    VaulticTools::new(client)
}

/// Build a tool surface with a static fallback API key configured
#[allow(dead_code)]
pub fn tools_with_api_key(server: &MockServer, api_key: &str) -> VaulticTools {
    let session = SessionStore::new();
    let mut client =
        VaulticClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), session)
            .expect("client init");
    client.set_api_key(api_key);
    VaulticTools::new(client)
}

/// JSON body for an API key record as the backend reports it
#[allow(dead_code)]
pub fn api_key_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "prefix": "vlt_live_",
        "createdAt": "2026-08-01T00:00:00Z",
        "lastUsed": null,
        "expiresAt": null,
    })
}
