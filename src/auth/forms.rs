//! Client-side form validation for the login, registration and
//! forgot-password screens
//!
//! Validators run synchronously before anything is sent to the
//! authentication collaborator. Password fields are wiped on drop.

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ValidationError;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
    pub agreed_to_privacy: bool,
}

impl RegistrationForm {
    /// Checks run in order; the first failure is reported
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }

        if !self.agreed_to_terms || !self.agreed_to_privacy {
            return Err(ValidationError::ConsentRequired);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        Ok(())
    }
}

/// Strength meter shown under the registration password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Length-based: under 6 is weak, under 10 medium, otherwise strong
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => Self::None,
            n if n < MIN_PASSWORD_LEN => Self::Weak,
            n if n < 10 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "약함",
            Self::Medium => "보통",
            Self::Strong => "강함",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegistrationForm {
        RegistrationForm {
            name: "김자취".into(),
            email: "me@example.com".into(),
            password: "secret12".into(),
            confirm_password: "secret12".into(),
            agreed_to_terms: true,
            agreed_to_privacy: true,
        }
    }

    #[test]
    fn test_valid_registration_accepted() {
        assert_eq!(valid_registration().validate(), Ok(()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = valid_registration();
        form.name = String::new();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = valid_registration();
        form.password = "abc12".into();
        form.confirm_password = "abc12".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_mismatch_rejected_before_length() {
        let mut form = valid_registration();
        form.confirm_password = "abc".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_consent_required() {
        let mut form = valid_registration();
        form.agreed_to_privacy = false;
        assert_eq!(form.validate(), Err(ValidationError::ConsentRequired));

        let mut form = valid_registration();
        form.agreed_to_terms = false;
        assert_eq!(form.validate(), Err(ValidationError::ConsentRequired));
    }

    #[test]
    fn test_login_blank_password() {
        let form = LoginForm::new("me@example.com", "");
        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingCredentials);
        assert_eq!(err.to_string(), "이메일과 비밀번호를 입력해주세요.");
    }

    #[test]
    fn test_forgot_password() {
        assert_eq!(
            ForgotPasswordForm::default().validate(),
            Err(ValidationError::MissingEmail)
        );
        let form = ForgotPasswordForm {
            email: "me@example.com".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(PasswordStrength::of(""), PasswordStrength::None);
        assert_eq!(PasswordStrength::of("abc12"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::of("abc123"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::of("abcdefghij"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::Medium.label(), "보통");
    }
}
