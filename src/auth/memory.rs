//! In-memory authentication collaborator
//!
//! A stand-in for the real authentication system: accounts live in a map for
//! the lifetime of the process, passwords are stored as Argon2id hashes, and
//! social logins always succeed with a generated profile. Nothing is
//! persisted.

use std::collections::HashMap;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::collaborator::{AuthCollaborator, AuthFailure, AuthOutcome};
use crate::models::{AuthProviderKind, ProfileUpdate, UserProfile};

struct Account {
    password_hash: String,
    profile: UserProfile,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, Account>,
    current: Option<UserProfile>,
    /// Account key of the signed-in email user; `None` for social sessions
    current_key: Option<String>,
}

/// Process-local authentication backed by a map of accounts
pub struct InMemoryAuth {
    state: Mutex<State>,
    hasher: Argon2<'static>,
    join_date: NaiveDate,
}

impl InMemoryAuth {
    /// New accounts are stamped with `join_date`
    pub fn new(join_date: NaiveDate) -> Self {
        // Light parameters: this store never sees real credentials.
        let params = Params::new(8 * 1024, 1, 1, None).unwrap_or_default();
        Self {
            state: Mutex::new(State::default()),
            hasher: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            join_date,
        }
    }

    /// Seed an email account, replacing any existing one with the same email
    pub async fn with_account(self, email: &str, password: &str, name: &str) -> Result<Self, AuthFailure> {
        let password_hash = self.hash(password)?;
        let profile = UserProfile::new(name, email, AuthProviderKind::Email, self.join_date);
        self.state.lock().await.accounts.insert(
            normalize(email),
            Account {
                password_hash,
                profile,
            },
        );
        Ok(self)
    }

    pub async fn sign_out(&self) {
        let mut state = self.state.lock().await;
        state.current = None;
        state.current_key = None;
    }

    fn hash(&self, password: &str) -> Result<String, AuthFailure> {
        let salt = SaltString::generate(&mut OsRng);
        self.hasher
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                warn!(error = %e, "password hashing failed");
                AuthFailure::silent()
            })
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        PasswordHash::new(stored)
            .map(|parsed| self.hasher.verify_password(password.as_bytes(), &parsed).is_ok())
            .unwrap_or(false)
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AuthCollaborator for InMemoryAuth {
    async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let key = normalize(email);
        let mut state = self.state.lock().await;
        let account = state
            .accounts
            .get(&key)
            .ok_or_else(|| AuthFailure::with_message("등록되지 않은 이메일입니다."))?;

        if !self.verify(password, &account.password_hash) {
            return Err(AuthFailure::with_message("비밀번호가 올바르지 않습니다."));
        }

        let profile = account.profile.clone();
        debug!(email = %profile.email, "signed in");
        state.current = Some(profile);
        state.current_key = Some(key);
        Ok(())
    }

    async fn register(&self, email: &str, password: &str, name: &str) -> AuthOutcome {
        let key = normalize(email);
        let password_hash = self.hash(password)?;
        let profile = UserProfile::new(name, email.trim(), AuthProviderKind::Email, self.join_date);

        let mut state = self.state.lock().await;
        if state.accounts.contains_key(&key) {
            return Err(AuthFailure::with_message("이미 가입된 이메일입니다."));
        }
        state.accounts.insert(
            key.clone(),
            Account {
                password_hash,
                profile: profile.clone(),
            },
        );
        state.current = Some(profile);
        state.current_key = Some(key);
        Ok(())
    }

    async fn social_login(&self, provider: AuthProviderKind) -> AuthOutcome {
        if provider == AuthProviderKind::Email {
            return Err(AuthFailure::with_message("지원하지 않는 로그인 방식입니다."));
        }
        let profile = UserProfile::new(
            format!("{} 사용자", provider),
            format!("user@{}.social", provider.code()),
            provider,
            self.join_date,
        );
        let mut state = self.state.lock().await;
        state.current = Some(profile);
        state.current_key = None;
        Ok(())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> AuthOutcome {
        let mut state = self.state.lock().await;
        let State {
            accounts,
            current,
            current_key,
        } = &mut *state;

        let current = current
            .as_mut()
            .ok_or_else(|| AuthFailure::with_message("로그인이 필요합니다."))?;
        current.apply(&update);

        if let Some(account) = current_key.as_ref().and_then(|key| accounts.get_mut(key)) {
            account.profile = current.clone();
        }
        Ok(())
    }

    async fn current_user(&self) -> Option<UserProfile> {
        self.state.lock().await.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let auth = InMemoryAuth::new(join_date());
        auth.register("me@example.com", "secret12", "김자취").await.unwrap();
        auth.sign_out().await;
        assert!(auth.current_user().await.is_none());

        auth.login("ME@example.com ", "secret12").await.unwrap();
        let user = auth.current_user().await.unwrap();
        assert_eq!(user.name, "김자취");
        assert_eq!(user.provider, AuthProviderKind::Email);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email() {
        let auth = InMemoryAuth::new(join_date())
            .with_account("demo@example.com", "password123", "데모")
            .await
            .unwrap();

        let err = auth.login("demo@example.com", "nope").await.unwrap_err();
        assert_eq!(err.message.as_deref(), Some("비밀번호가 올바르지 않습니다."));

        let err = auth.login("ghost@example.com", "password123").await.unwrap_err();
        assert_eq!(err.message.as_deref(), Some("등록되지 않은 이메일입니다."));
        assert!(auth.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let auth = InMemoryAuth::new(join_date());
        auth.register("me@example.com", "secret12", "a").await.unwrap();
        let err = auth.register("me@example.com", "secret12", "b").await.unwrap_err();
        assert_eq!(err.message.as_deref(), Some("이미 가입된 이메일입니다."));
    }

    #[tokio::test]
    async fn test_social_login() {
        let auth = InMemoryAuth::new(join_date());
        auth.social_login(AuthProviderKind::Kakao).await.unwrap();
        assert_eq!(auth.current_user().await.unwrap().provider, AuthProviderKind::Kakao);
        assert!(auth.social_login(AuthProviderKind::Email).await.is_err());
    }

    #[tokio::test]
    async fn test_update_profile_requires_session() {
        let auth = InMemoryAuth::new(join_date());
        let update = ProfileUpdate {
            bio: Some("자취 3년차".into()),
            ..Default::default()
        };
        assert!(auth.update_profile(update.clone()).await.is_err());

        auth.social_login(AuthProviderKind::Google).await.unwrap();
        auth.update_profile(update).await.unwrap();
        assert_eq!(auth.current_user().await.unwrap().bio, "자취 3년차");
    }
}
