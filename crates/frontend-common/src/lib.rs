pub mod auth;
pub mod client;
pub mod components;
pub mod hooks;
pub mod logging;
pub mod services;

pub use auth::{AuthContext, AuthProvider};
pub use client::AuthApi;
pub use components::SessionExpiredNotice;
pub use hooks::{use_auth, use_auth_service};
pub use logging::init_logging;
pub use services::AuthService;
