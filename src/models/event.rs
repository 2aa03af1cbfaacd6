//! Calendar event model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Study,
    Work,
    Life,
    Personal,
}

impl EventKind {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Study => "blue",
            Self::Work => "green",
            Self::Life => "orange",
            Self::Personal => "gray",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Study => "학업",
            Self::Work => "알바",
            Self::Life => "생활",
            Self::Personal => "개인",
        };
        write!(f, "{}", label)
    }
}

/// Event priority; `Ord` sorts high first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn color(&self) -> &'static str {
        match self {
            Self::High => "red",
            Self::Medium => "yellow",
            Self::Low => "green",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "높음",
            Self::Medium => "보통",
            Self::Low => "낮음",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub priority: Priority,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        kind: EventKind,
        date: NaiveDate,
        time: NaiveTime,
        priority: Priority,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            kind,
            date,
            time,
            priority,
        }
    }
}
