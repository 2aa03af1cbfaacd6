//! Authentication screens
//!
//! Form validation, the collaborator contract, an in-memory collaborator for
//! the CLI, and the submit flow that ties them together.

pub mod collaborator;
pub mod flow;
pub mod forms;
pub mod memory;

pub use collaborator::{AuthCollaborator, AuthFailure, AuthOutcome};
pub use flow::AuthFlow;
pub use forms::{ForgotPasswordForm, LoginForm, PasswordStrength, RegistrationForm, MIN_PASSWORD_LEN};
pub use memory::InMemoryAuth;
