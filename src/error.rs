//! Custom error types for Homekeeper
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Form validation failures live in their own
//! enum because their messages are shown to the user verbatim.

use thiserror::Error;

/// The main error type for Homekeeper operations
#[derive(Error, Debug)]
pub enum HomekeeperError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input failed form validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Budget computation errors
    #[error("Budget error: {0}")]
    Budget(String),

    /// The authentication collaborator rejected the request
    #[error("{0}")]
    Auth(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl HomekeeperError {
    /// Create a "not found" error for routes
    pub fn route_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Route",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for shopping list entries
    pub fn shopping_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Shopping item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for emergency guides
    pub fn guide_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Emergency guide",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Form validation failures, carrying the message shown inline under the form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("모든 필드를 입력해주세요.")]
    MissingFields,

    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,

    #[error("비밀번호는 최소 6자 이상이어야 합니다.")]
    PasswordTooShort,

    #[error("이용약관과 개인정보처리방침에 동의해주세요.")]
    ConsentRequired,

    #[error("이메일과 비밀번호를 입력해주세요.")]
    MissingCredentials,

    #[error("이메일을 입력해주세요.")]
    MissingEmail,

    #[error("금액은 0보다 큰 정수여야 합니다: {0}")]
    InvalidAmount(String),

    #[error("수량은 0보다 큰 정수여야 합니다: {0}")]
    InvalidQuantity(String),

    #[error("알 수 없는 카테고리입니다: {0}")]
    UnknownCategory(String),

    #[error("날짜 형식이 올바르지 않습니다 (YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for HomekeeperError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HomekeeperError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Homekeeper operations
pub type HomekeeperResult<T> = Result<T, HomekeeperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HomekeeperError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = HomekeeperError::route_not_found("/nowhere");
        assert_eq!(err.to_string(), "Route not found: /nowhere");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err: HomekeeperError = ValidationError::PasswordMismatch.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "비밀번호가 일치하지 않습니다.");
    }

    #[test]
    fn test_auth_message_is_verbatim() {
        let err = HomekeeperError::Auth("이미 가입된 이메일입니다.".into());
        assert_eq!(err.to_string(), "이미 가입된 이메일입니다.");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HomekeeperError = io_err.into();
        assert!(matches!(err, HomekeeperError::Io(_)));
    }
}
