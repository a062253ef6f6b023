//! Storefront configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Application root, where signed-in visitors land
    pub const ROOT_PATH: &'static str = "/";

    /// Sign-in page, where anonymous visitors are sent from private pages
    pub const LOGIN_PATH: &'static str = "/login";

    /// Prefix of the auth endpoints on the API origin
    pub const API_PREFIX: &'static str = "/api/auth";

    /// Session storage key for the persisted session
    pub const SESSION_STORAGE_KEY: &'static str = "brewhouse_session";

    /// Session expiry check interval in milliseconds
    pub const SESSION_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute
}
