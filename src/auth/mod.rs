// Stand-in credential and session checks.
//
// There is no user store and no token issuance: every session is the one
// sentinel token, and the only user is a fixed profile.

pub mod models;

use thiserror::Error;

pub use models::{LoginRequest, RegisterRequest, TokenRequest, UserProfile};

/// The only session token this service hands out or accepts
pub const SENTINEL_TOKEN: &str = "xxxxxxx";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("メールアドレスまたはパスワードが違います")]
    InvalidCredentials,

    #[error("トークンが無効です")]
    InvalidToken,
}

/// Check a login attempt and return the session token on success.
///
/// Fails only when both fields are empty.
pub fn verify_credentials(email: &str, password: &str) -> Result<&'static str, AuthError> {
    if email.is_empty() && password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(SENTINEL_TOKEN)
}

pub fn verify_token(token: &str) -> Result<(), AuthError> {
    if token != SENTINEL_TOKEN {
        return Err(AuthError::InvalidToken);
    }
    Ok(())
}

/// Profile returned for any valid session
pub fn current_user() -> UserProfile {
    UserProfile {
        id: 1,
        name: "test".to_string(),
        email: "test@example.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        assert_eq!(verify_credentials("", ""), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn any_non_empty_credential_yields_sentinel() {
        assert_eq!(verify_credentials("user@example.com", ""), Ok(SENTINEL_TOKEN));
        assert_eq!(verify_credentials("", "password"), Ok(SENTINEL_TOKEN));
        assert_eq!(verify_credentials("user@example.com", "password"), Ok(SENTINEL_TOKEN));
    }

    #[test]
    fn only_sentinel_token_verifies() {
        assert!(verify_token(SENTINEL_TOKEN).is_ok());
        assert_eq!(verify_token("yyyyyyy"), Err(AuthError::InvalidToken));
        assert_eq!(verify_token(" xxxxxxx"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn error_messages_match_wire_text() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "メールアドレスまたはパスワードが違います"
        );
        assert_eq!(AuthError::InvalidToken.to_string(), "トークンが無効です");
    }
}
