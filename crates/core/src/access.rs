//! Role-aware projection of the auth slice

use crate::auth::{AuthState, Role};
use std::ops::Deref;
use std::rc::Rc;

/// The auth slice plus role flags derived from the signed-in user.
///
/// Built fresh from a state snapshot on every read; nothing is cached beyond
/// the snapshot itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthView {
    state: Rc<AuthState>,
    pub is_admin: bool,
    pub is_customer: bool,
}

impl AuthView {
    pub fn new(state: Rc<AuthState>) -> Self {
        let role = state.role();
        let is_admin = role == Some(&Role::Admin);
        let is_customer = role == Some(&Role::Customer);

        Self {
            state,
            is_admin,
            is_customer,
        }
    }

    /// Whether the signed-in user holds exactly `role`
    pub fn has_role(&self, role: &Role) -> bool {
        self.state.role() == Some(role)
    }
}

impl Deref for AuthView {
    type Target = AuthState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl From<Rc<AuthState>> for AuthView {
    fn from(state: Rc<AuthState>) -> Self {
        Self::new(state)
    }
}
