//! Custom hooks for the application

use crate::auth::AuthContext;
use crate::services::AuthService;
use brewhouse_core::AuthView;
use yew::prelude::*;

/// Hook to read the auth slice with role flags
#[hook]
pub fn use_auth() -> AuthView {
    use_auth_context().view
}

/// Hook to reach the auth flows (login, signup, logout)
#[hook]
pub fn use_auth_service() -> AuthService {
    use_auth_context().service
}

#[hook]
fn use_auth_context() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
