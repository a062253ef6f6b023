//! Authentication module

pub mod context;
pub mod error_messages;

// Re-export commonly used items
pub use context::{AuthContext, AuthProvider};
pub use error_messages::{form_error, get_user_friendly_error};
