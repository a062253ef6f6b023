//! HTTP client for the storefront auth API

use brewhouse_core::{AuthConfig, AuthError, User};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use web_sys::window;

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login or signup
#[derive(Debug, Clone, Deserialize)]
pub struct SessionGrant {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Typed access to `/api/auth/*`
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: Client,
    base_url: String,
}

impl Default for AuthApi {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApi {
    /// Client pointed at the page's own origin
    pub fn new() -> Self {
        Self::with_base_url(get_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, AuthConfig::API_PREFIX, endpoint)
    }

    /// Ask the server who owns `token`
    pub async fn session(&self, token: &str) -> Result<User, AuthError> {
        let request = self.client.get(self.url("/session")).bearer_auth(token);
        let response = send(request).await?;
        if !response.status().is_success() {
            return Err(read_error(response, AuthError::SessionExpired).await);
        }
        response
            .json()
            .await
            .map_err(|e| AuthError::network(format!("Failed to parse session: {e}")))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<SessionGrant, AuthError> {
        let request = self.client.post(self.url("/login")).json(request);
        grant(send(request).await?).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<SessionGrant, AuthError> {
        let request = self.client.post(self.url("/signup")).json(request);
        grant(send(request).await?).await
    }

    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let request = self.client.post(self.url("/logout")).bearer_auth(token);
        let response = send(request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(read_error(response, AuthError::SessionExpired).await)
        }
    }
}

async fn send(request: RequestBuilder) -> Result<Response, AuthError> {
    let response = request
        .send()
        .await
        .map_err(|e| AuthError::network(e.to_string()))?;
    debug!(status = %response.status(), url = %response.url(), "auth api response");
    Ok(response)
}

async fn grant(response: Response) -> Result<SessionGrant, AuthError> {
    if !response.status().is_success() {
        return Err(read_error(response, AuthError::InvalidCredentials).await);
    }
    response
        .json()
        .await
        .map_err(|e| AuthError::network(format!("Failed to parse session grant: {e}")))
}

async fn read_error(response: Response, unauthorized: AuthError) -> AuthError {
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .map(|body| body.message);
    classify_failure(status, message, unauthorized)
}

/// Map a failed response onto the error stored in the auth slice.
///
/// 401 means `unauthorized` (bad credentials on login, a dead token
/// elsewhere). Other client errors carry the server's message as-is.
pub fn classify_failure(
    status: StatusCode,
    message: Option<String>,
    unauthorized: AuthError,
) -> AuthError {
    if status == StatusCode::UNAUTHORIZED {
        return unauthorized;
    }

    let message = message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });

    if status.is_client_error() {
        AuthError::rejected(message)
    } else {
        AuthError::server(status.as_u16(), message)
    }
}
