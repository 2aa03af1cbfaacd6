//! Home-maintenance schedule and calendar views

use serde::Serialize;
use tabled::Tabled;

use super::report::{format_header, labeled};
use crate::models::{Event, Facility, ScheduleItem};
use crate::services::{CalendarCell, CalendarSummary, ScheduleSummary};

const LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TaskRow {
    #[tabled(rename = "할 일")]
    pub title: String,
    #[tabled(rename = "분류")]
    pub kind: String,
    #[tabled(rename = "기한")]
    pub due_date: String,
    #[tabled(rename = "상태")]
    pub status: String,
}

impl From<&ScheduleItem> for TaskRow {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            title: item.title.clone(),
            kind: item.kind.to_string(),
            due_date: item.due_date.to_string(),
            status: item.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FacilityRow {
    #[tabled(rename = "시설")]
    pub name: String,
    #[tabled(rename = "거리")]
    pub distance: String,
    #[tabled(rename = "주소")]
    pub address: String,
}

impl From<&Facility> for FacilityRow {
    fn from(facility: &Facility) -> Self {
        Self {
            name: facility.name.clone(),
            distance: format!("{}m", facility.distance_m),
            address: facility.address.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EventRow {
    #[tabled(rename = "날짜")]
    pub date: String,
    #[tabled(rename = "시간")]
    pub time: String,
    #[tabled(rename = "일정")]
    pub title: String,
    #[tabled(rename = "분류")]
    pub kind: String,
    #[tabled(rename = "중요도")]
    pub priority: String,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            date: event.date.to_string(),
            time: event.time.format("%H:%M").to_string(),
            title: event.title.clone(),
            kind: event.kind.to_string(),
            priority: event.priority.to_string(),
        }
    }
}

pub fn format_schedule_overview(summary: &ScheduleSummary) -> String {
    [
        format_header("집관리"),
        labeled("대기 중", summary.pending, LABEL_WIDTH),
        labeled("지연", summary.overdue, LABEL_WIDTH),
        labeled("완료", summary.completed, LABEL_WIDTH),
        labeled("주변 시설", summary.nearby_facilities, LABEL_WIDTH),
    ]
    .join("\n")
}

pub fn format_calendar_overview(summary: &CalendarSummary) -> String {
    [
        format_header("일정관리"),
        labeled("오늘 일정", summary.today_count, LABEL_WIDTH),
        labeled("중요 일정", summary.high_priority, LABEL_WIDTH),
        labeled("다가오는 일정", summary.upcoming_count, LABEL_WIDTH),
    ]
    .join("\n")
}

/// Render a month grid as text, one week per line
///
/// Today is bracketed and days with events carry a trailing `*`.
pub fn format_month_grid(year: i32, month: u32, cells: &[CalendarCell]) -> String {
    let mut out = format!("{}년 {}월\n", year, month);
    out.push_str("  일    월    화    수    목    금    토\n");

    for week in cells.chunks(7) {
        let line: Vec<String> = week.iter().map(format_cell).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn format_cell(cell: &CalendarCell) -> String {
    match cell.day {
        None => " ".repeat(5),
        Some(day) => {
            let (open, close) = if cell.is_today { ('[', ']') } else { (' ', ' ') };
            let mark = if cell.has_event { '*' } else { ' ' };
            format!("{}{:>2}{}{}", open, day, close, mark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, Priority};
    use crate::services::calendar::month_grid;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_event_row_time_format() {
        let event = Event::new(
            "과제 제출",
            EventKind::Study,
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
            Priority::High,
        );
        let row = EventRow::from(&event);
        assert_eq!(row.time, "23:59");
        assert_eq!(row.priority, "높음");
    }

    #[test]
    fn test_month_grid_text() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let cells = month_grid(2024, 1, &[], today).unwrap();
        let text = format_month_grid(2024, 1, &cells);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2024년 1월");
        // 5 week rows after the two header lines
        assert_eq!(lines.len(), 7);
        assert!(text.contains("[ 8]"));
        assert!(lines[6].ends_with("31"));
    }

    #[test]
    fn test_facility_distance() {
        let row = FacilityRow::from(&Facility::new("택배함", "delivery", 10, "역삼동"));
        assert_eq!(row.distance, "10m");
    }
}
