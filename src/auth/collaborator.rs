//! The authentication collaborator contract
//!
//! Credential checks, sessions and social sign-in are owned by an external
//! system. Pages only consume this trait, so any implementation can be
//! injected.

use std::fmt;

use crate::models::{AuthProviderKind, ProfileUpdate, UserProfile};

/// A rejected authentication request
///
/// The message, when present, comes from the collaborator and is shown to the
/// user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthFailure {
    pub message: Option<String>,
}

impl AuthFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn silent() -> Self {
        Self { message: None }
    }

    /// The collaborator's message, or `fallback` if it gave none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "authentication failed"),
        }
    }
}

impl std::error::Error for AuthFailure {}

pub type AuthOutcome = Result<(), AuthFailure>;

/// Capability set of the external authentication system
#[allow(async_fn_in_trait)]
pub trait AuthCollaborator {
    async fn login(&self, email: &str, password: &str) -> AuthOutcome;

    async fn register(&self, email: &str, password: &str, name: &str) -> AuthOutcome;

    async fn social_login(&self, provider: AuthProviderKind) -> AuthOutcome;

    async fn update_profile(&self, update: ProfileUpdate) -> AuthOutcome;

    /// The signed-in user, if any
    async fn current_user(&self) -> Option<UserProfile>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_or_prefers_collaborator_message() {
        let failure = AuthFailure::with_message("비밀번호가 틀렸습니다.");
        assert_eq!(failure.message_or("로그인에 실패했습니다."), "비밀번호가 틀렸습니다.");
        assert_eq!(
            AuthFailure::silent().message_or("로그인에 실패했습니다."),
            "로그인에 실패했습니다."
        );
    }
}
