/*
[INPUT]:  HTTP client configuration and backend endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod keys;

pub use client::{ClientConfig, VaulticClient};
pub use error::{ErrorKind, Result, VaulticError};
