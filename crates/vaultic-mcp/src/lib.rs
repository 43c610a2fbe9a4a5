/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Vaultic adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod keys;
pub mod tools;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthGate,
    AuthManager,
    BackendVerifier,
    MockVerifier,
    SessionStatus,
    SessionStore,
    SessionToken,
    SignatureVerifier,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ErrorKind,
    Result,
    VaulticClient,
    VaulticError,
};

// Re-export the key manager
pub use keys::KeyManager;

// Re-export the tool surface
pub use tools::{ToolResponse, VaulticTools};

// Re-export all wire types
pub use types::*;
