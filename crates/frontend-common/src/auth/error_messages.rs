//! User-friendly error message mappings

use brewhouse_core::AuthError;

/// Convert auth errors to messages fit for a sign-in form
pub fn get_user_friendly_error(error: &AuthError) -> String {
    match error {
        AuthError::InvalidCredentials => {
            "That email and password don't match an account.".to_string()
        }
        AuthError::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
        AuthError::Network { .. } => {
            "We couldn't reach the shop. Check your connection and try again.".to_string()
        }
        AuthError::Server { .. } => {
            "Something went wrong on our side. Please try again in a moment.".to_string()
        }
        // Server should provide user-friendly messages
        AuthError::Rejected { message } => message.clone(),
    }
}

/// Message for a sign-in form's error box. An expired session is left to the
/// global notice so it is not announced twice.
pub fn form_error(error: &AuthError) -> Option<String> {
    match error {
        AuthError::SessionExpired => None,
        other => Some(get_user_friendly_error(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_transport_details() {
        let message = get_user_friendly_error(&AuthError::network("dns failure on api.local"));
        assert!(!message.contains("dns"));

        let message = get_user_friendly_error(&AuthError::server(500, "stack trace"));
        assert!(!message.contains("stack"));
    }

    #[test]
    fn passes_server_rejections_through() {
        assert_eq!(
            get_user_friendly_error(&AuthError::rejected("Password too short")),
            "Password too short"
        );
    }

    #[test]
    fn form_leaves_session_expiry_to_the_notice() {
        assert_eq!(form_error(&AuthError::SessionExpired), None);
        assert_eq!(
            form_error(&AuthError::InvalidCredentials).as_deref(),
            Some("That email and password don't match an account.")
        );
    }
}
