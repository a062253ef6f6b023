//! Auth service
//!
//! The single writer of the auth slice. Pages never dispatch directly; they
//! call the flows below, which talk to the API, keep session storage in step
//! and then dispatch the matching [`AuthAction`].

use super::storage;
use crate::client::{AuthApi, LoginRequest, SessionGrant, SignupRequest};
use brewhouse_core::{AuthAction, AuthError, AuthReader, AuthStore, PersistedSession};
use std::rc::Rc;
use tracing::{info, warn};

/// Current time as a Unix timestamp in seconds
fn now() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[derive(Clone)]
pub struct AuthService {
    store: Rc<AuthStore>,
    api: AuthApi,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AuthService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl AuthService {
    pub fn new() -> Self {
        Self::with_api(AuthApi::new())
    }

    pub fn with_api(api: AuthApi) -> Self {
        Self {
            store: Rc::new(AuthStore::new()),
            api,
        }
    }

    pub fn reader(&self) -> AuthReader {
        self.store.reader()
    }

    /// Settle the initial session check.
    ///
    /// A stored, unexpired session is confirmed with the server. When the
    /// server cannot be reached or fails with a 5xx the stored user is
    /// trusted until the next check.
    pub async fn restore_session(&self) {
        self.store.dispatch(AuthAction::SessionCheckStarted);

        let Some(mut session) = PersistedSession::restore(storage::load_raw().as_deref(), now())
        else {
            storage::clear();
            self.store.dispatch(AuthAction::SessionResolved(None));
            return;
        };

        match self.api.session(&session.token).await {
            Ok(user) => {
                session.user = user.clone();
                persist(&session);
                self.store.dispatch(AuthAction::SessionResolved(Some(user)));
            }
            Err(err) if err.is_transient() => {
                warn!(error = %err, "session check failed, using stored session");
                self.store
                    .dispatch(AuthAction::SessionResolved(Some(session.user)));
            }
            Err(err) => {
                info!(error = %err, "stored session rejected");
                storage::clear();
                self.store.dispatch(AuthAction::SessionResolved(None));
            }
        }
    }

    pub async fn login(&self, email: String, password: String) {
        self.store.dispatch(AuthAction::LoginStarted);
        let result = self.api.login(&LoginRequest { email, password }).await;
        self.finish_sign_in(result);
    }

    pub async fn signup(&self, name: String, email: String, password: String) {
        self.store.dispatch(AuthAction::LoginStarted);
        let result = self
            .api
            .signup(&SignupRequest {
                name,
                email,
                password,
            })
            .await;
        self.finish_sign_in(result);
    }

    /// Sign out locally even if the server call fails
    pub async fn logout(&self) {
        let stored = storage::load_raw().and_then(|raw| PersistedSession::decode(&raw).ok());
        if let Some(session) = stored {
            if let Err(err) = self.api.logout(&session.token).await {
                warn!(error = %err, "server logout failed");
            }
        }
        storage::clear();
        self.store.dispatch(AuthAction::Logout);
    }

    /// Expire the signed-in session once its stored token has lapsed. A
    /// session that never made it into storage is left alone.
    pub fn validate_expiry(&self) {
        if !self.store.state().is_authenticated() {
            return;
        }
        if PersistedSession::has_lapsed(storage::load_raw().as_deref(), now()) {
            info!("session expired");
            storage::clear();
            self.store.dispatch(AuthAction::SessionExpired);
        }
    }

    pub fn clear_error(&self) {
        self.store.dispatch(AuthAction::ClearError);
    }

    fn finish_sign_in(&self, result: Result<SessionGrant, AuthError>) {
        match result {
            Ok(grant) => {
                info!(user_id = %grant.user.id, role = %grant.user.role, "signed in");
                persist(&PersistedSession {
                    user: grant.user.clone(),
                    token: grant.token,
                    expires_at: grant.expires_at,
                });
                self.store.dispatch(AuthAction::LoginSucceeded(grant.user));
            }
            Err(err) => {
                info!(error = %err, "sign-in failed");
                self.store.dispatch(AuthAction::LoginFailed(err));
            }
        }
    }
}

fn persist(session: &PersistedSession) {
    if let Err(err) = storage::save(session) {
        warn!(error = %err, "could not persist session");
    }
}
