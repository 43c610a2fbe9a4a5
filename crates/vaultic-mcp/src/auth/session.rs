/*
[INPUT]:  Session tokens and expiry instants
[OUTPUT]: Token retrieval and validity status
[POS]:    Auth layer - session token lifecycle management
[UPDATE]: When changing storage strategy or validity rules
*/

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// The bearer credential obtained from a successful verification.
///
/// `expires_at` of `None` means the token never expires.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Thread-safe single-slot session store.
///
/// Holds at most one token; `set` unconditionally replaces any prior
/// value. Expiry is lazy: no timer fires, the `Authenticated ->
/// Unauthenticated` transition is observed whenever validity is read
/// after `expires_at` has passed.
#[derive(Debug, Clone)]
pub struct SessionStore {
    data: Arc<RwLock<Option<SessionToken>>>,
}

impl SessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Install a token, replacing any prior one
    pub fn set(&self, token: String, expires_at: Option<DateTime<Utc>>) {
        let mut guard = self.data.write().unwrap();
        *guard = Some(SessionToken { token, expires_at });
    }

    /// Get the current token value, if any.
    ///
    /// Does not enforce validity; callers must check `is_valid` before
    /// trusting the token, or use `bearer` which does both in one read.
    pub fn get(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.token.clone())
    }

    /// Check whether a usable token is held.
    ///
    /// False when the slot is empty or when `expires_at <= now`.
    pub fn is_valid(&self) -> bool {
        let guard = self.data.read().unwrap();
        match guard.as_ref() {
            Some(data) => is_live(data),
            None => false,
        }
    }

    /// Return the token only while it is valid.
    ///
    /// Validity and value are read under a single guard, so a concurrent
    /// `clear` cannot slip between the check and the read.
    pub fn bearer(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard
            .as_ref()
            .filter(|data| is_live(data))
            .map(|data| data.token.clone())
    }

    /// Get the full token record, if any
    pub fn token_data(&self) -> Option<SessionToken> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Drop the stored token
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

fn is_live(data: &SessionToken) -> bool {
    match data.expires_at {
        Some(expires_at) => Utc::now() < expires_at,
        None => true,
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new();
        assert!(store.get().is_none());
        assert!(store.bearer().is_none());
        assert!(!store.is_valid());
    }

    #[test]
    fn test_set_and_get_token() {
        let store = SessionStore::new();
        let expires_at = Utc::now() + Duration::seconds(3600);
        store.set("tsk_1".to_string(), Some(expires_at));

        assert_eq!(store.get(), Some("tsk_1".to_string()));
        assert_eq!(store.bearer(), Some("tsk_1".to_string()));
        assert!(store.is_valid());
    }

    #[test]
    fn test_set_replaces_prior_token() {
        let store = SessionStore::new();
        store.set("tsk_old".to_string(), None);
        store.set("tsk_new".to_string(), None);

        assert_eq!(store.get(), Some("tsk_new".to_string()));
    }

    #[test]
    fn test_token_without_expiry_never_lapses() {
        let store = SessionStore::new();
        store.set("tsk_forever".to_string(), None);

        assert!(store.is_valid());
        assert_eq!(store.bearer(), Some("tsk_forever".to_string()));
    }

    #[test]
    fn test_expired_token_is_invalid_without_intervening_call() {
        let store = SessionStore::new();
        store.set(
            "tsk_stale".to_string(),
            Some(Utc::now() - Duration::seconds(1)),
        );

        assert!(!store.is_valid());
        assert!(store.bearer().is_none());
        // get() still returns the raw value; it does not enforce validity
        assert_eq!(store.get(), Some("tsk_stale".to_string()));
    }

    #[test]
    fn test_clear_token() {
        let store = SessionStore::new();
        store.set(
            "tsk_1".to_string(),
            Some(Utc::now() + Duration::seconds(3600)),
        );

        store.clear();
        assert!(store.get().is_none());
        assert!(!store.is_valid());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set("tsk_shared".to_string(), None);

        assert_eq!(other.get(), Some("tsk_shared".to_string()));
        other.clear();
        assert!(!store.is_valid());
    }
}
