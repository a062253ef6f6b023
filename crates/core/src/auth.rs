//! Authentication state slice
//!
//! [`AuthState`] is the single process-wide record of who is signed in. It is
//! only ever replaced wholesale: writers describe what happened with an
//! [`AuthAction`] and [`AuthState::reduce`] produces the next state.

use crate::error::{AuthError, CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to a user account.
///
/// Matching is exact and case-sensitive: `"Admin"` is not an admin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Customer,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
            Self::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "admin" => Self::Admin,
            "customer" => Self::Customer,
            _ => Self::Other(role),
        }
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::from(role.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed-in account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Authentication state.
///
/// `is_authenticated` always equals `user.is_some()`. The fields are private
/// so that every state is built through a constructor or
/// [`AuthState::from_parts`], which rejects parts breaking that rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthStateParts", into = "AuthStateParts")]
pub struct AuthState {
    user: Option<User>,
    is_authenticated: bool,
    is_loading: bool,
    error: Option<AuthError>,
}

/// Unchecked field-by-field form of [`AuthState`], as it appears on the wire
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStateParts {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub error: Option<AuthError>,
}

/// Everything that can happen to the auth slice
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SessionCheckStarted,
    SessionResolved(Option<User>),
    LoginStarted,
    LoginSucceeded(User),
    LoginFailed(AuthError),
    Logout,
    SessionExpired,
    ClearError,
}

impl AuthAction {
    /// Short name for logs; avoids printing user details
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SessionCheckStarted => "session_check_started",
            Self::SessionResolved(_) => "session_resolved",
            Self::LoginStarted => "login_started",
            Self::LoginSucceeded(_) => "login_succeeded",
            Self::LoginFailed(_) => "login_failed",
            Self::Logout => "logout",
            Self::SessionExpired => "session_expired",
            Self::ClearError => "clear_error",
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}

impl AuthState {
    /// Initial state: a session check is assumed to be in flight
    pub const fn loading() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }

    pub const fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }

    /// Settled anonymous state carrying the error that caused it
    pub const fn failed(error: AuthError) -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: Some(error),
        }
    }

    /// Build a state from loose parts, rejecting `is_authenticated` values
    /// that disagree with the presence of a user.
    pub fn from_parts(parts: AuthStateParts) -> CoreResult<Self> {
        if parts.is_authenticated != parts.user.is_some() {
            return Err(CoreError::inconsistent_state(format!(
                "is_authenticated is {} but user is {}",
                parts.is_authenticated,
                if parts.user.is_some() { "present" } else { "absent" }
            )));
        }

        Ok(Self {
            user: parts.user,
            is_authenticated: parts.is_authenticated,
            is_loading: parts.is_loading,
            error: parts.error,
        })
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub const fn error(&self) -> Option<&AuthError> {
        self.error.as_ref()
    }

    /// Role of the signed-in user, if any
    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|user| &user.role)
    }

    /// Compute the state that follows `action`
    #[must_use]
    pub fn reduce(&self, action: AuthAction) -> Self {
        match action {
            AuthAction::SessionCheckStarted | AuthAction::LoginStarted => Self {
                is_loading: true,
                error: None,
                ..self.clone()
            },
            AuthAction::SessionResolved(Some(user)) | AuthAction::LoginSucceeded(user) => {
                Self::authenticated(user)
            }
            AuthAction::SessionResolved(None) | AuthAction::Logout => Self::anonymous(),
            AuthAction::LoginFailed(error) => Self::failed(error),
            AuthAction::SessionExpired => Self::failed(AuthError::SessionExpired),
            AuthAction::ClearError => Self {
                error: None,
                ..self.clone()
            },
        }
    }
}

impl TryFrom<AuthStateParts> for AuthState {
    type Error = CoreError;

    fn try_from(parts: AuthStateParts) -> CoreResult<Self> {
        Self::from_parts(parts)
    }
}

impl From<AuthState> for AuthStateParts {
    fn from(state: AuthState) -> Self {
        Self {
            user: state.user,
            is_authenticated: state.is_authenticated,
            is_loading: state.is_loading,
            error: state.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn starts_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.is_loading());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn role_parsing_is_exact() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("customer"), Role::Customer);
        assert_eq!(Role::from("Admin"), Role::Other("Admin".to_string()));
        assert_eq!(Role::from(" customer"), Role::Other(" customer".to_string()));
        assert_eq!(String::from(Role::Other("barista".to_string())), "barista");
    }

    #[test]
    fn role_serializes_as_plain_string() {
        let user: User = serde_json::from_str(
            r#"{"id":"u-2","name":"Bo","email":"bo@example.com","role":"barista"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Other("barista".to_string()));
        assert_eq!(serde_json::to_value(&user).unwrap()["role"], "barista");
    }

    #[test]
    fn from_parts_rejects_authenticated_without_user() {
        let parts = AuthStateParts {
            is_authenticated: true,
            ..AuthStateParts::default()
        };
        assert!(matches!(
            AuthState::from_parts(parts),
            Err(CoreError::InconsistentState { .. })
        ));
    }

    #[test]
    fn from_parts_rejects_user_without_authenticated() {
        let parts = AuthStateParts {
            user: Some(customer()),
            ..AuthStateParts::default()
        };
        assert!(AuthState::from_parts(parts).is_err());
    }

    #[test]
    fn deserialization_enforces_consistency() {
        let bad = r#"{"isAuthenticated":true,"isLoading":false}"#;
        assert!(serde_json::from_str::<AuthState>(bad).is_err());

        let good = r#"{"isLoading":true}"#;
        let state: AuthState = serde_json::from_str(good).unwrap();
        assert_eq!(state, AuthState::loading());
    }

    #[test]
    fn session_resolution_settles_state() {
        let signed_in = AuthState::loading().reduce(AuthAction::SessionResolved(Some(customer())));
        assert_eq!(signed_in, AuthState::authenticated(customer()));

        let signed_out = AuthState::loading().reduce(AuthAction::SessionResolved(None));
        assert_eq!(signed_out, AuthState::anonymous());
    }

    #[test]
    fn login_started_keeps_user_and_clears_error() {
        let state = AuthState::failed(AuthError::InvalidCredentials).reduce(AuthAction::LoginStarted);
        assert!(state.is_loading());
        assert!(state.error().is_none());

        let refreshing =
            AuthState::authenticated(customer()).reduce(AuthAction::SessionCheckStarted);
        assert!(refreshing.is_loading());
        assert!(refreshing.is_authenticated());
        assert_eq!(refreshing.user(), Some(&customer()));
    }

    #[test]
    fn failures_and_expiry_carry_errors() {
        let failed = AuthState::loading()
            .reduce(AuthAction::LoginFailed(AuthError::InvalidCredentials));
        assert_eq!(failed.error(), Some(&AuthError::InvalidCredentials));
        assert!(!failed.is_loading());

        let expired = AuthState::authenticated(customer()).reduce(AuthAction::SessionExpired);
        assert!(!expired.is_authenticated());
        assert_eq!(expired.error(), Some(&AuthError::SessionExpired));

        let cleared = expired.reduce(AuthAction::ClearError);
        assert_eq!(cleared, AuthState::anonymous());
    }

    #[test]
    fn logout_forgets_user() {
        let state = AuthState::authenticated(customer()).reduce(AuthAction::Logout);
        assert_eq!(state, AuthState::anonymous());
    }
}
