//! Brewhouse core: authentication state, access projection and route gates

pub mod access;
pub mod auth;
pub mod config;
pub mod error;
pub mod gate;
pub mod session;
pub mod store;

pub use access::AuthView;
pub use auth::{AuthAction, AuthState, AuthStateParts, Role, User};
pub use config::AuthConfig;
pub use error::{AuthError, CoreError, CoreResult};
pub use gate::{GateDecision, GateWatcher, Guarded, Navigate, Redirect, RouteGate};
pub use session::PersistedSession;
pub use store::{AuthReader, AuthStore, Subscription};
