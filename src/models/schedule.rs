//! Home-maintenance schedule models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{FacilityId, ScheduleItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Utilities,
    Safety,
    Maintenance,
    Cleaning,
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Utilities => "공과금",
            Self::Safety => "안전점검",
            Self::Maintenance => "유지보수",
            Self::Cleaning => "청소",
        };
        write!(f, "{}", label)
    }
}

/// Task status. Items move between these only by direct user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn all() -> &'static [Self] {
        &[Self::Pending, Self::Overdue, Self::Completed]
    }

    /// Badge colour name
    pub fn color(&self) -> &'static str {
        match self {
            Self::Completed => "green",
            Self::Overdue => "red",
            Self::Pending => "yellow",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Completed => "완료",
            Self::Overdue => "지연",
            Self::Pending => "대기",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ScheduleItemId,
    pub title: String,
    pub kind: ScheduleKind,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

impl ScheduleItem {
    pub fn new(
        title: impl Into<String>,
        kind: ScheduleKind,
        due_date: NaiveDate,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: ScheduleItemId::new(),
            title: title.into(),
            kind,
            due_date,
            status,
        }
    }

    /// Mark the task done
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }
}

/// A nearby convenience facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub kind: String,
    /// Walking distance in metres
    pub distance_m: u32,
    pub address: String,
}

impl Facility {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        distance_m: u32,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: FacilityId::new(),
            name: name.into(),
            kind: kind.into(),
            distance_m,
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(TaskStatus::Completed.to_string(), "완료");
        assert_eq!(TaskStatus::Overdue.color(), "red");
    }

    #[test]
    fn test_complete() {
        let mut item = ScheduleItem::new(
            "분리수거",
            ScheduleKind::Cleaning,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            TaskStatus::Overdue,
        );
        item.complete();
        assert_eq!(item.status, TaskStatus::Completed);
    }
}
