//! Calendar CLI commands

use std::io::Write;

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use serde::Serialize;

use super::Context;
use crate::display::schedule::{format_calendar_overview, format_month_grid, EventRow};
use crate::error::{HomekeeperResult, ValidationError};
use crate::export::{export_error, JsonDocument, OutputFormat, Report};
use crate::fixtures;
use crate::models::Event;
use crate::services::calendar::{by_date, events_on, month_grid, upcoming, UPCOMING_LIMIT};
use crate::services::{CalendarCell, CalendarSummary};

/// Calendar subcommands
#[derive(Subcommand, Debug)]
pub enum CalendarCommands {
    /// Today's counters and the next few events
    Summary,

    /// Events on a given day (defaults to today)
    Day {
        /// Date (YYYY-MM-DD)
        date: Option<NaiveDate>,
    },

    /// Events after today, soonest first
    Upcoming {
        #[arg(short, long, default_value_t = UPCOMING_LIMIT)]
        limit: usize,
    },

    /// Every event grouped by date
    All,

    /// Month grid with event days marked
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct CalendarDocument<'a> {
    summary: &'a CalendarSummary,
    upcoming: &'a [EventRow],
}

#[derive(Debug, Serialize)]
struct MonthDocument<'a> {
    year: i32,
    month: u32,
    cells: &'a [CalendarCell],
    events: &'a [EventRow],
}

/// Handle a calendar command
pub fn handle_calendar_command<W: Write>(
    ctx: &Context,
    cmd: CalendarCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let events = fixtures::events();
    let today = ctx.today;

    match cmd {
        CalendarCommands::Summary => {
            let summary = CalendarSummary::compute(&events, today);
            let rows = event_rows(upcoming(&events, today, UPCOMING_LIMIT));
            let document = CalendarDocument {
                summary: &summary,
                upcoming: &rows,
            };

            Report {
                overview: format_calendar_overview(&summary),
                document: &JsonDocument::new("calendar", today, &document),
                rows: &rows,
                empty: "다가오는 일정이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        CalendarCommands::Day { date } => {
            let date = date.unwrap_or(today);
            let rows = event_rows(events_on(&events, date));

            Report {
                overview: String::new(),
                document: &JsonDocument::new("day", today, &rows),
                rows: &rows,
                empty: "일정이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        CalendarCommands::Upcoming { limit } => {
            let rows = event_rows(upcoming(&events, today, limit));

            Report {
                overview: String::new(),
                document: &JsonDocument::new("upcoming", today, &rows),
                rows: &rows,
                empty: "다가오는 일정이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        CalendarCommands::All => {
            let grouped = by_date(&events);
            let rows = event_rows(grouped.values().flatten().copied().collect());

            Report {
                overview: String::new(),
                document: &JsonDocument::new("events", today, &grouped),
                rows: &rows,
                empty: "일정이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        CalendarCommands::Month { month } => {
            let first = match month {
                Some(ref text) => parse_month(text)?,
                None => today.with_day(1).unwrap_or(today),
            };
            let (year, month) = (first.year(), first.month());
            let cells = month_grid(year, month, &events, today)
                .ok_or_else(|| ValidationError::InvalidDate(format!("{}-{:02}", year, month)))?;
            let in_month: Vec<&Event> = events
                .iter()
                .filter(|e| e.date.year() == year && e.date.month() == month)
                .collect();
            let rows = event_rows(in_month);

            if ctx.format == OutputFormat::Table {
                return write!(out, "{}", format_month_grid(year, month, &cells)).map_err(export_error);
            }

            let document = MonthDocument {
                year,
                month,
                cells: &cells,
                events: &rows,
            };
            Report {
                overview: String::new(),
                document: &JsonDocument::new("month", today, &document),
                rows: &rows,
                empty: "",
            }
            .emit(out, ctx.format)
        }
    }
}

fn event_rows(events: Vec<&Event>) -> Vec<EventRow> {
    events.into_iter().map(EventRow::from).collect()
}

/// Parse "YYYY-MM" into the first day of that month
fn parse_month(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}
