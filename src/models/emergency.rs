//! Emergency contacts and counselling services

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ContactId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl EmergencyContact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            number: number.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounselingService {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub kind: String,
}

/// Step-by-step guide for one kind of household emergency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyGuide {
    /// Short code used to pick the guide, e.g. "fire"
    pub id: String,
    pub title: String,
    pub description: String,
    /// Actions in the order they should be taken
    pub steps: Vec<String>,
}

impl EmergencyGuide {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        steps: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when every whitespace-separated term occurs in the title,
    /// description or one of the steps. A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        query.split_whitespace().all(|term| {
            self.title.to_lowercase().contains(term)
                || self.description.to_lowercase().contains(term)
                || self.steps.iter().any(|s| s.to_lowercase().contains(term))
        })
    }
}

/// Self-reported stress band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressBand {
    Good,
    Caution,
    Danger,
}

impl StressBand {
    /// Below 30 is good, below 70 calls for caution, anything higher is danger
    pub fn classify(score: u8) -> Self {
        match score {
            0..=29 => Self::Good,
            30..=69 => Self::Caution,
            _ => Self::Danger,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Caution => "yellow",
            Self::Danger => "red",
        }
    }
}

impl fmt::Display for StressBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Good => "양호",
            Self::Caution => "주의",
            Self::Danger => "위험",
        };
        write!(f, "{}", label)
    }
}
