//! Authentication CLI commands
//!
//! Drives the login, registration, social login, forgot-password and profile
//! screens against the in-memory collaborator. The collaborator is seeded
//! with a demo account and forgets everything when the process exits.

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;
use tracing::debug;

use super::Context;
use crate::auth::{
    AuthCollaborator, AuthFlow, ForgotPasswordForm, InMemoryAuth, LoginForm, PasswordStrength,
    RegistrationForm,
};
use crate::error::{HomekeeperError, HomekeeperResult};
use crate::export::{export_error, write_json, write_yaml, JsonDocument, OutputFormat};
use crate::fixtures::{DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD};
use crate::models::{AuthProviderKind, ProfileUpdate, UserProfile};

/// Authentication subcommands
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Log in with email and password
    Login {
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Page to return to after logging in
        #[arg(long)]
        from: Option<String>,
    },

    /// Create an account
    Register {
        name: String,
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Password confirmation (prompted for when omitted)
        #[arg(long)]
        confirm: Option<String>,
        /// Agree to the terms of service
        #[arg(long)]
        agree_terms: bool,
        /// Agree to the privacy policy
        #[arg(long)]
        agree_privacy: bool,
    },

    /// Log in through a social provider (google, kakao, naver)
    Social {
        provider: AuthProviderKind,
        /// Page to return to after logging in
        #[arg(long)]
        from: Option<String>,
    },

    /// Request a password reset mail
    Forgot { email: String },

    /// Rate a password the way the registration form does
    Strength {
        /// Password to rate (prompted for when omitted)
        password: Option<String>,
    },

    /// Log in, then update profile fields
    Profile {
        email: String,
        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        new_email: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
}

/// What an auth command reports back
#[derive(Debug, Serialize)]
struct AuthOutput {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserProfile>,
}

/// Handle an auth command
pub async fn handle_auth_command<W: Write>(
    ctx: &Context,
    cmd: AuthCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let auth = InMemoryAuth::new(ctx.today)
        .with_account(DEMO_EMAIL, DEMO_PASSWORD, DEMO_NAME)
        .await
        .map_err(|failure| HomekeeperError::Auth(failure.to_string()))?;
    let flow = AuthFlow::new(&auth);

    let output = match cmd {
        AuthCommands::Login {
            email,
            password,
            from,
        } => {
            let form = LoginForm::new(email, password_or_prompt(password, "비밀번호: ")?);
            let redirect = flow.submit_login(&form, from.as_deref()).await?;
            AuthOutput {
                message: "로그인되었습니다.".to_string(),
                redirect: Some(redirect),
                user: auth.current_user().await,
            }
        }

        AuthCommands::Register {
            name,
            email,
            password,
            confirm,
            agree_terms,
            agree_privacy,
        } => {
            let password = password_or_prompt(password, "비밀번호: ")?;
            let confirm_password = password_or_prompt(confirm, "비밀번호 확인: ")?;
            let form = RegistrationForm {
                name,
                email,
                password,
                confirm_password,
                agreed_to_terms: agree_terms,
                agreed_to_privacy: agree_privacy,
            };
            let redirect = flow.submit_registration(&form).await?;
            AuthOutput {
                message: "회원가입이 완료되었습니다.".to_string(),
                redirect: Some(redirect),
                user: auth.current_user().await,
            }
        }

        AuthCommands::Social { provider, from } => {
            let redirect = flow.social_login(provider, from.as_deref()).await?;
            AuthOutput {
                message: format!("{} 계정으로 로그인되었습니다.", provider),
                redirect: Some(redirect),
                user: auth.current_user().await,
            }
        }

        AuthCommands::Forgot { email } => {
            flow.request_password_reset(&ForgotPasswordForm { email: email.clone() })?;
            AuthOutput {
                message: format!("{}으로 비밀번호 재설정 안내를 보냈습니다.", email.trim()),
                redirect: None,
                user: None,
            }
        }

        AuthCommands::Strength { password } => {
            let password = password_or_prompt(password, "비밀번호: ")?;
            let strength = PasswordStrength::of(&password);
            AuthOutput {
                message: format!("비밀번호 강도: {}", display_strength(strength)),
                redirect: None,
                user: None,
            }
        }

        AuthCommands::Profile {
            email,
            password,
            name,
            new_email,
            bio,
            location,
        } => {
            let form = LoginForm::new(email, password_or_prompt(password, "비밀번호: ")?);
            flow.submit_login(&form, None).await?;

            let update = ProfileUpdate {
                name,
                email: new_email,
                bio,
                location,
                avatar: None,
            };
            let message = flow.update_profile(update).await?;
            AuthOutput {
                message: message.to_string(),
                redirect: None,
                user: auth.current_user().await,
            }
        }
    };

    write_output(ctx, &output, out)
}

fn display_strength(strength: PasswordStrength) -> &'static str {
    match strength {
        PasswordStrength::None => "-",
        other => other.label(),
    }
}

/// Use the given password or ask for one without echoing it
fn password_or_prompt(given: Option<String>, prompt: &str) -> HomekeeperResult<String> {
    match given {
        Some(password) => Ok(password),
        None => {
            debug!("prompting for password");
            rpassword::prompt_password(prompt)
                .map_err(|e| HomekeeperError::Io(format!("Failed to read password: {}", e)))
        }
    }
}

fn write_output<W: Write>(ctx: &Context, output: &AuthOutput, out: &mut W) -> HomekeeperResult<()> {
    match ctx.format {
        OutputFormat::Json => write_json(out, &JsonDocument::new("auth", ctx.today, output)),
        OutputFormat::Yaml => write_yaml(out, &JsonDocument::new("auth", ctx.today, output)),
        OutputFormat::Table | OutputFormat::Csv => {
            writeln!(out, "{}", output.message).map_err(export_error)?;
            if let Some(redirect) = &output.redirect {
                writeln!(out, "이동: {}", redirect).map_err(export_error)?;
            }
            if let Some(user) = &output.user {
                writeln!(out, "사용자: {} <{}>", user.name, user.email).map_err(export_error)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use chrono::NaiveDate;

    fn ctx(format: OutputFormat) -> Context {
        Context::new(Settings::default(), NaiveDate::from_ymd_opt(2024, 1, 8), format)
    }

    async fn run(cmd: AuthCommands, format: OutputFormat) -> HomekeeperResult<String> {
        let mut out = Vec::new();
        handle_auth_command(&ctx(format), cmd, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_demo_login_returns_to_from() {
        let cmd = AuthCommands::Login {
            email: DEMO_EMAIL.into(),
            password: Some(DEMO_PASSWORD.into()),
            from: Some("/profile".into()),
        };
        let text = run(cmd, OutputFormat::Table).await.unwrap();
        assert!(text.contains("이동: /profile"));
        assert!(text.contains(DEMO_NAME));
    }

    #[tokio::test]
    async fn test_wrong_password_message() {
        let cmd = AuthCommands::Login {
            email: DEMO_EMAIL.into(),
            password: Some("wrong-password".into()),
            from: None,
        };
        let err = run(cmd, OutputFormat::Table).await.unwrap_err();
        assert_eq!(err.to_string(), "비밀번호가 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn test_register_requires_consent() {
        let cmd = AuthCommands::Register {
            name: "새 사용자".into(),
            email: "new@example.com".into(),
            password: Some("secret12".into()),
            confirm: Some("secret12".into()),
            agree_terms: true,
            agree_privacy: false,
        };
        let err = run(cmd, OutputFormat::Table).await.unwrap_err();
        assert_eq!(err.to_string(), "이용약관과 개인정보처리방침에 동의해주세요.");
    }

    #[tokio::test]
    async fn test_register_existing_email() {
        let cmd = AuthCommands::Register {
            name: "데모".into(),
            email: DEMO_EMAIL.into(),
            password: Some("secret12".into()),
            confirm: Some("secret12".into()),
            agree_terms: true,
            agree_privacy: true,
        };
        let err = run(cmd, OutputFormat::Table).await.unwrap_err();
        assert_eq!(err.to_string(), "이미 가입된 이메일입니다.");
    }

    #[tokio::test]
    async fn test_profile_update_json() {
        let cmd = AuthCommands::Profile {
            email: DEMO_EMAIL.into(),
            password: Some(DEMO_PASSWORD.into()),
            name: None,
            new_email: None,
            bio: Some("자취 3년차".into()),
            location: Some("서울시 강남구".into()),
        };
        let text = run(cmd, OutputFormat::Json).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["data"]["message"], "프로필이 성공적으로 업데이트되었습니다.");
        assert_eq!(value["data"]["user"]["bio"], "자취 3년차");
    }

    #[tokio::test]
    async fn test_strength_and_forgot() {
        let text = run(
            AuthCommands::Strength {
                password: Some("abcdefghijk".into()),
            },
            OutputFormat::Table,
        )
        .await
        .unwrap();
        assert_eq!(text.trim(), "비밀번호 강도: 강함");

        let err = run(AuthCommands::Forgot { email: "  ".into() }, OutputFormat::Table)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "이메일을 입력해주세요.");
    }
}
