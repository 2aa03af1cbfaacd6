//! User profile as exposed by the authentication collaborator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the account was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    Email,
    Google,
    Kakao,
    Naver,
}

impl AuthProviderKind {
    /// Providers offered as social-login buttons
    pub fn social() -> &'static [Self] {
        &[Self::Google, Self::Kakao, Self::Naver]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Google => "google",
            Self::Kakao => "kakao",
            Self::Naver => "naver",
        }
    }
}

impl fmt::Display for AuthProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AuthProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "google" => Ok(Self::Google),
            "kakao" => Ok(Self::Kakao),
            "naver" => Ok(Self::Naver),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    pub join_date: NaiveDate,
    pub provider: AuthProviderKind,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        provider: AuthProviderKind,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
            bio: String::new(),
            location: String::new(),
            join_date,
            provider,
        }
    }

    /// Apply the fields present in `update`, leaving the rest untouched
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(bio) = &update.bio {
            self.bio = bio.clone();
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(avatar) = &update.avatar {
            self.avatar = Some(avatar.clone());
        }
    }
}

/// A partial profile edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial_update() {
        let mut profile = UserProfile::new(
            "김자취",
            "me@example.com",
            AuthProviderKind::Email,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        profile.apply(&ProfileUpdate {
            location: Some("서울시 강남구".into()),
            ..Default::default()
        });

        assert_eq!(profile.location, "서울시 강남구");
        assert_eq!(profile.name, "김자취");
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("Kakao".parse::<AuthProviderKind>().unwrap(), AuthProviderKind::Kakao);
        assert!("facebook".parse::<AuthProviderKind>().is_err());
        assert!(ProfileUpdate::default().is_empty());
    }
}
