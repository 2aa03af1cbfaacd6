//! Calendar service
//!
//! Buckets events by date, picks out today's and upcoming events, and lays a
//! month out as a Sunday-first grid.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Event, Priority};

/// How many upcoming events the side panel lists
pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarSummary {
    pub today_count: usize,
    pub high_priority: usize,
    pub upcoming_count: usize,
}

impl CalendarSummary {
    pub fn compute(events: &[Event], today: NaiveDate) -> Self {
        Self {
            today_count: events_on(events, today).len(),
            high_priority: events.iter().filter(|e| e.priority == Priority::High).count(),
            upcoming_count: upcoming(events, today, usize::MAX).len(),
        }
    }
}

/// Events on `date`, by time of day
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let mut on_day: Vec<_> = events.iter().filter(|e| e.date == date).collect();
    on_day.sort_by_key(|e| (e.time, e.priority));
    on_day
}

/// Events strictly after `today`, ordered by date, time, then priority
pub fn upcoming(events: &[Event], today: NaiveDate, limit: usize) -> Vec<&Event> {
    let mut later: Vec<_> = events.iter().filter(|e| e.date > today).collect();
    later.sort_by_key(|e| (e.date, e.time, e.priority));
    later.truncate(limit);
    later
}

/// Events grouped by date in ascending order
pub fn by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        buckets.entry(event.date).or_default().push(event);
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by_key(|e| (e.time, e.priority));
    }
    buckets
}

/// One square of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Day of month, `None` for padding before the 1st or after the last day
    pub day: Option<u32>,
    pub is_today: bool,
    pub has_event: bool,
}

/// Lay out `year`-`month` as Sunday-first weeks
///
/// The grid has 35 cells, growing to 42 when the month spills into a sixth
/// week. Returns `None` for an invalid month.
pub fn month_grid(year: i32, month: u32, events: &[Event], today: NaiveDate) -> Option<Vec<CalendarCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days_in_month = (next_month - first).num_days() as u32;
    let lead = first.weekday().num_days_from_sunday();

    let cell_count = if lead + days_in_month > 35 { 42 } else { 35 };

    let cells = (0..cell_count)
        .map(|i| {
            if i < lead || i - lead >= days_in_month {
                return CalendarCell {
                    day: None,
                    is_today: false,
                    has_event: false,
                };
            }
            let day = i - lead + 1;
            let date = first + Duration::days(i64::from(day - 1));
            CalendarCell {
                day: Some(day),
                is_today: date == today,
                has_event: events.iter().any(|e| e.date == date),
            }
        })
        .collect();

    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;
    use chrono::NaiveTime;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn event(title: &str, d: u32, hour: u32, priority: Priority) -> Event {
        Event::new(
            title,
            EventKind::Study,
            date(d),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            priority,
        )
    }

    fn sample() -> Vec<Event> {
        vec![
            event("중간고사", 15, 9, Priority::High),
            event("알바", 8, 14, Priority::Medium),
            event("전기세 납부", 10, 18, Priority::High),
            event("친구 만나기", 12, 19, Priority::Low),
            event("과제 제출", 9, 23, Priority::High),
        ]
    }

    #[test]
    fn test_summary() {
        let summary = CalendarSummary::compute(&sample(), date(8));
        assert_eq!(summary.today_count, 1);
        assert_eq!(summary.high_priority, 3);
        assert_eq!(summary.upcoming_count, 4);
    }

    #[test]
    fn test_upcoming_is_strictly_after_today_and_ordered() {
        let events = sample();
        let titles: Vec<_> = upcoming(&events, date(8), UPCOMING_LIMIT)
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["과제 제출", "전기세 납부", "친구 만나기", "중간고사"]);
        assert_eq!(upcoming(&events, date(8), 2).len(), 2);
    }

    #[test]
    fn test_by_date_buckets() {
        let mut events = sample();
        events.push(event("스터디", 15, 7, Priority::Low));
        let buckets = by_date(&events);

        assert_eq!(buckets.len(), 5);
        let fifteenth = &buckets[&date(15)];
        assert_eq!(fifteenth[0].title, "스터디");
        assert_eq!(buckets.keys().next(), Some(&date(8)));
    }

    #[test]
    fn test_month_grid_january_2024() {
        // January 1st 2024 was a Monday
        let grid = month_grid(2024, 1, &sample(), date(8)).unwrap();
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].day, None);
        assert_eq!(grid[1].day, Some(1));
        assert_eq!(grid[31].day, Some(31));
        assert_eq!(grid[32].day, None);

        let today = grid.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today.day, Some(8));
        assert!(today.has_event);
        assert_eq!(grid.iter().filter(|c| c.has_event).count(), 5);
    }

    #[test]
    fn test_month_grid_six_weeks() {
        // March 2024 starts on a Friday and has 31 days
        let grid = month_grid(2024, 3, &[], date(8)).unwrap();
        assert_eq!(grid.len(), 42);
        assert!(month_grid(2024, 13, &[], date(8)).is_none());
    }
}
