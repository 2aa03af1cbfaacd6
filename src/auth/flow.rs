//! Form submission flow
//!
//! Each submit validates its form first and calls the collaborator only when
//! validation passes. A rejected call becomes [`HomekeeperError::Auth`]
//! carrying the collaborator's message verbatim, or a fixed fallback.

use tracing::{info, warn};

use super::collaborator::AuthCollaborator;
use super::forms::{ForgotPasswordForm, LoginForm, RegistrationForm};
use crate::error::{HomekeeperError, HomekeeperResult};
use crate::models::{AuthProviderKind, ProfileUpdate};
use crate::navigation::HOME_PATH;

const LOGIN_FAILED: &str = "로그인에 실패했습니다.";
const REGISTER_FAILED: &str = "회원가입에 실패했습니다.";
const SOCIAL_FAILED: &str = "소셜 로그인에 실패했습니다.";
const PROFILE_FAILED: &str = "프로필 업데이트에 실패했습니다.";

/// Shown after a successful profile update
pub const PROFILE_UPDATED: &str = "프로필이 성공적으로 업데이트되었습니다.";

/// Drives the auth screens against an injected collaborator
pub struct AuthFlow<'a, A: AuthCollaborator> {
    auth: &'a A,
}

impl<'a, A: AuthCollaborator> AuthFlow<'a, A> {
    pub fn new(auth: &'a A) -> Self {
        Self { auth }
    }

    /// Log in and return the path to navigate to
    ///
    /// `return_to` is the page the user was redirected away from, if any.
    pub async fn submit_login(
        &self,
        form: &LoginForm,
        return_to: Option<&str>,
    ) -> HomekeeperResult<String> {
        form.validate()?;

        self.auth
            .login(form.email.trim(), &form.password)
            .await
            .map_err(|failure| {
                warn!(email = %form.email.trim(), "login rejected");
                HomekeeperError::Auth(failure.message_or(LOGIN_FAILED))
            })?;

        info!(email = %form.email.trim(), "login succeeded");
        Ok(return_to.unwrap_or(HOME_PATH).to_string())
    }

    /// Register and return the path to navigate to (always home)
    pub async fn submit_registration(&self, form: &RegistrationForm) -> HomekeeperResult<String> {
        form.validate()?;

        self.auth
            .register(form.email.trim(), &form.password, form.name.trim())
            .await
            .map_err(|failure| HomekeeperError::Auth(failure.message_or(REGISTER_FAILED)))?;

        info!(email = %form.email.trim(), "registration succeeded");
        Ok(HOME_PATH.to_string())
    }

    pub async fn social_login(
        &self,
        provider: AuthProviderKind,
        return_to: Option<&str>,
    ) -> HomekeeperResult<String> {
        self.auth
            .social_login(provider)
            .await
            .map_err(|failure| HomekeeperError::Auth(failure.message_or(SOCIAL_FAILED)))?;

        info!(%provider, "social login succeeded");
        Ok(return_to.unwrap_or(HOME_PATH).to_string())
    }

    /// Validate the reset request; delivery of the reset mail is out of scope
    pub fn request_password_reset(&self, form: &ForgotPasswordForm) -> HomekeeperResult<()> {
        form.validate()?;
        info!(email = %form.email.trim(), "password reset requested");
        Ok(())
    }

    /// Apply `update` to the signed-in user and return the confirmation message
    pub async fn update_profile(&self, update: ProfileUpdate) -> HomekeeperResult<&'static str> {
        self.auth
            .update_profile(update)
            .await
            .map_err(|failure| HomekeeperError::Auth(failure.message_or(PROFILE_FAILED)))?;
        info!("profile updated");
        Ok(PROFILE_UPDATED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::collaborator::{AuthFailure, AuthOutcome};
    use crate::error::ValidationError;
    use crate::models::UserProfile;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and answers with a fixed outcome
    struct Scripted {
        calls: AtomicUsize,
        outcome: AuthOutcome,
    }

    impl Scripted {
        fn new(outcome: AuthOutcome) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn answer(&self) -> AuthOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    impl AuthCollaborator for Scripted {
        async fn login(&self, _email: &str, _password: &str) -> AuthOutcome {
            self.answer()
        }

        async fn register(&self, _email: &str, _password: &str, _name: &str) -> AuthOutcome {
            self.answer()
        }

        async fn social_login(&self, _provider: AuthProviderKind) -> AuthOutcome {
            self.answer()
        }

        async fn update_profile(&self, _update: ProfileUpdate) -> AuthOutcome {
            self.answer()
        }

        async fn current_user(&self) -> Option<UserProfile> {
            None
        }
    }

    #[tokio::test]
    async fn test_blank_password_never_reaches_collaborator() {
        let auth = Scripted::new(Ok(()));
        let flow = AuthFlow::new(&auth);

        let err = flow
            .submit_login(&LoginForm::new("me@example.com", ""), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HomekeeperError::Validation(ValidationError::MissingCredentials)
        ));
        assert_eq!(auth.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_login_delegates_exactly_once() {
        let auth = Scripted::new(Ok(()));
        let flow = AuthFlow::new(&auth);

        let to = flow
            .submit_login(&LoginForm::new("me@example.com", "secret12"), Some("/profile"))
            .await
            .unwrap();

        assert_eq!(to, "/profile");
        assert_eq!(auth.calls(), 1);
    }

    #[tokio::test]
    async fn test_login_defaults_to_home() {
        let auth = Scripted::new(Ok(()));
        let to = AuthFlow::new(&auth)
            .submit_login(&LoginForm::new("me@example.com", "secret12"), None)
            .await
            .unwrap();
        assert_eq!(to, "/");
    }

    #[tokio::test]
    async fn test_collaborator_message_shown_verbatim() {
        let auth = Scripted::new(Err(AuthFailure::with_message("계정이 잠겼습니다.")));
        let err = AuthFlow::new(&auth)
            .submit_login(&LoginForm::new("me@example.com", "secret12"), None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "계정이 잠겼습니다.");
    }

    #[tokio::test]
    async fn test_fallback_messages() {
        let auth = Scripted::new(Err(AuthFailure::silent()));
        let flow = AuthFlow::new(&auth);

        let err = flow
            .submit_login(&LoginForm::new("me@example.com", "secret12"), None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FAILED);

        let err = flow
            .social_login(AuthProviderKind::Naver, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), SOCIAL_FAILED);

        let err = flow.update_profile(ProfileUpdate::default()).await.unwrap_err();
        assert_eq!(err.to_string(), PROFILE_FAILED);
    }

    #[tokio::test]
    async fn test_registration_validates_first() {
        let auth = Scripted::new(Err(AuthFailure::silent()));
        let flow = AuthFlow::new(&auth);

        let form = RegistrationForm {
            name: "김자취".into(),
            email: "me@example.com".into(),
            password: "abc12".into(),
            confirm_password: "abc12".into(),
            agreed_to_terms: true,
            agreed_to_privacy: true,
        };
        let err = flow.submit_registration(&form).await.unwrap_err();
        assert_eq!(err.to_string(), "비밀번호는 최소 6자 이상이어야 합니다.");
        assert_eq!(auth.calls(), 0);

        let mut form = form;
        form.password = "abc123".into();
        form.confirm_password = "abc123".into();
        let err = flow.submit_registration(&form).await.unwrap_err();
        assert_eq!(err.to_string(), REGISTER_FAILED);
        assert_eq!(auth.calls(), 1);
    }

    #[test]
    fn test_password_reset_validation() {
        let auth = Scripted::new(Ok(()));
        let flow = AuthFlow::new(&auth);
        assert!(flow
            .request_password_reset(&ForgotPasswordForm::default())
            .unwrap_err()
            .is_validation());
        assert_eq!(auth.calls(), 0);
    }
}
