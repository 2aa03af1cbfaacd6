//! Schedule service
//!
//! Counts home-maintenance tasks by status for the schedule page.

use serde::Serialize;

use crate::models::{Facility, ScheduleItem, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub pending: usize,
    pub overdue: usize,
    pub completed: usize,
    pub nearby_facilities: usize,
}

impl ScheduleSummary {
    pub fn compute(items: &[ScheduleItem], facilities: &[Facility]) -> Self {
        let count = |status: TaskStatus| items.iter().filter(|i| i.status == status).count();
        Self {
            pending: count(TaskStatus::Pending),
            overdue: count(TaskStatus::Overdue),
            completed: count(TaskStatus::Completed),
            nearby_facilities: facilities.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.overdue + self.completed
    }
}

/// Tasks in the given status, earliest due first
pub fn tasks_with_status(items: &[ScheduleItem], status: TaskStatus) -> Vec<&ScheduleItem> {
    let mut tasks: Vec<_> = items.iter().filter(|i| i.status == status).collect();
    tasks.sort_by_key(|i| i.due_date);
    tasks
}

/// Facilities sorted by walking distance
pub fn nearest_facilities(facilities: &[Facility]) -> Vec<&Facility> {
    let mut sorted: Vec<_> = facilities.iter().collect();
    sorted.sort_by_key(|f| f.distance_m);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleKind;
    use chrono::NaiveDate;

    fn task(day: u32, status: TaskStatus) -> ScheduleItem {
        ScheduleItem::new(
            format!("task {}", day),
            ScheduleKind::Maintenance,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            status,
        )
    }

    #[test]
    fn test_counts_by_status() {
        let items = vec![
            task(15, TaskStatus::Pending),
            task(20, TaskStatus::Pending),
            task(25, TaskStatus::Completed),
            task(8, TaskStatus::Overdue),
        ];
        let facilities = vec![Facility::new("편의점", "convenience", 30, "역삼동")];
        let summary = ScheduleSummary::compute(&items, &facilities);

        assert_eq!(summary.pending, 2);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.nearby_facilities, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_tasks_with_status_sorted() {
        let items = vec![task(20, TaskStatus::Pending), task(15, TaskStatus::Pending)];
        let pending = tasks_with_status(&items, TaskStatus::Pending);
        assert_eq!(pending[0].title, "task 15");
        assert!(tasks_with_status(&items, TaskStatus::Overdue).is_empty());
    }

    #[test]
    fn test_nearest_facilities() {
        let facilities = vec![
            Facility::new("마트", "mart", 200, ""),
            Facility::new("택배함", "delivery", 10, ""),
        ];
        assert_eq!(nearest_facilities(&facilities)[0].name, "택배함");
    }
}
