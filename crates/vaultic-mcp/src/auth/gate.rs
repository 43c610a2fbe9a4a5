/*
[INPUT]:  Shared session store
[OUTPUT]: Pass/fail authorization decisions
[POS]:    Auth layer - pre-check for every privileged operation
[UPDATE]: When the authorization rule changes
*/

use tracing::debug;

use crate::auth::SessionStore;
use crate::http::{Result, VaulticError};

/// Mandatory pre-check run before every privileged operation.
///
/// The decision is re-evaluated on every call and never cached, so a
/// lapsed token is rejected on the very next call with no invalidation
/// event required.
#[derive(Debug, Clone)]
pub struct AuthGate {
    session: SessionStore,
}

impl AuthGate {
    /// Create a gate over the given session store
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Reject with `AuthenticationRequired` unless a valid session
    /// token is held. On rejection the backend must not be contacted.
    pub fn require_session(&self) -> Result<()> {
        if self.session.is_valid() {
            Ok(())
        } else {
            debug!("privileged operation rejected: no valid session");
            Err(VaulticError::AuthenticationRequired)
        }
    }
}
