//! Persisted session
//!
//! The browser keeps the signed-in user and API token in session storage so a
//! reload does not sign the visitor out. This module owns the stored format;
//! the storage itself lives with the frontend.

use crate::auth::User;
use crate::error::CoreResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: User,
    pub token: String,
    /// Unix timestamp in seconds; `None` never expires
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl PersistedSession {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    pub fn encode(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Recover a usable session from whatever was found in storage. Missing,
    /// unreadable and expired sessions all come back as `None`.
    pub fn restore(raw: Option<&str>, now: i64) -> Option<Self> {
        match Self::decode(raw?) {
            Ok(session) if !session.is_expired(now) => Some(session),
            Ok(_) => None,
            Err(err) => {
                warn!(error = %err, "discarding unreadable stored session");
                None
            }
        }
    }

    /// Whether a signed-in session has run out. Only a stored session that
    /// decodes and is past its expiry counts; a missing or unreadable entry
    /// says nothing about the session held in memory.
    pub fn has_lapsed(raw: Option<&str>, now: i64) -> bool {
        raw.and_then(|raw| Self::decode(raw).ok())
            .is_some_and(|session| session.is_expired(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    fn session(expires_at: Option<i64>) -> PersistedSession {
        PersistedSession {
            user: User {
                id: "u-7".to_string(),
                name: "Kit".to_string(),
                email: "kit@example.com".to_string(),
                role: Role::Customer,
            },
            token: "tok".to_string(),
            expires_at,
        }
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let s = session(Some(100));
        assert!(!s.is_expired(99));
        assert!(s.is_expired(100));
        assert!(!session(None).is_expired(i64::MAX));
    }

    #[test]
    fn restore_valid_session() {
        let raw = session(Some(1_000)).encode().unwrap();
        assert_eq!(
            PersistedSession::restore(Some(&raw), 10),
            Some(session(Some(1_000)))
        );
    }

    #[test]
    fn restore_falls_back_to_signed_out() {
        let expired = session(Some(5)).encode().unwrap();
        for raw in [None, Some("not json"), Some(expired.as_str())] {
            assert_eq!(PersistedSession::restore(raw, 10), None);
        }
    }

    #[test]
    fn missing_stored_session_has_not_lapsed() {
        assert!(!PersistedSession::has_lapsed(None, 10));
    }

    #[test]
    fn unreadable_stored_session_has_not_lapsed() {
        assert!(!PersistedSession::has_lapsed(Some("not json"), 10));
        assert!(!PersistedSession::has_lapsed(Some(""), 10));
    }

    #[test]
    fn expired_stored_session_has_lapsed() {
        let raw = session(Some(5)).encode().unwrap();
        assert!(PersistedSession::has_lapsed(Some(&raw), 10));
        assert!(PersistedSession::has_lapsed(Some(&raw), 5));

        let live = session(Some(1_000)).encode().unwrap();
        assert!(!PersistedSession::has_lapsed(Some(&live), 10));
        let open_ended = session(None).encode().unwrap();
        assert!(!PersistedSession::has_lapsed(Some(&open_ended), i64::MAX));
    }

    #[test]
    fn missing_expiry_field_decodes() {
        let raw = r#"{"user":{"id":"1","name":"A","email":"a@b.c","role":"admin"},"token":"t"}"#;
        let decoded = PersistedSession::decode(raw).unwrap();
        assert_eq!(decoded.expires_at, None);
        assert_eq!(decoded.user.role, Role::Admin);
    }
}
