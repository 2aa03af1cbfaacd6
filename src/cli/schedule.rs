//! Home-maintenance schedule CLI commands

use std::io::Write;

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use super::Context;
use crate::display::schedule::{format_schedule_overview, FacilityRow, TaskRow};
use crate::error::HomekeeperResult;
use crate::export::{JsonDocument, Report};
use crate::fixtures;
use crate::models::TaskStatus;
use crate::services::schedule::{nearest_facilities, tasks_with_status};
use crate::services::ScheduleSummary;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Completed,
    Overdue,
}

impl From<StatusFilter> for TaskStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Pending => TaskStatus::Pending,
            StatusFilter::Completed => TaskStatus::Completed,
            StatusFilter::Overdue => TaskStatus::Overdue,
        }
    }
}

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// Count tasks by status and list them
    Summary,

    /// List tasks, optionally only those in one status
    Tasks {
        #[arg(short, long, value_enum)]
        status: Option<StatusFilter>,
    },

    /// List nearby facilities, closest first
    Facilities,
}

#[derive(Debug, Serialize)]
struct ScheduleDocument<'a> {
    summary: &'a ScheduleSummary,
    tasks: &'a [TaskRow],
}

/// Handle a schedule command
pub fn handle_schedule_command<W: Write>(
    ctx: &Context,
    cmd: ScheduleCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let tasks = fixtures::schedule();
    let facilities = fixtures::facilities();

    match cmd {
        ScheduleCommands::Summary => {
            let summary = ScheduleSummary::compute(&tasks, &facilities);
            let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
            let document = ScheduleDocument {
                summary: &summary,
                tasks: &rows,
            };

            Report {
                overview: format_schedule_overview(&summary),
                document: &JsonDocument::new("schedule", ctx.today, &document),
                rows: &rows,
                empty: "등록된 할 일이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        ScheduleCommands::Tasks { status } => {
            let selected = match status {
                Some(filter) => tasks_with_status(&tasks, filter.into()),
                None => {
                    let mut all: Vec<_> = tasks.iter().collect();
                    all.sort_by_key(|t| t.due_date);
                    all
                }
            };
            let rows: Vec<TaskRow> = selected.into_iter().map(TaskRow::from).collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("tasks", ctx.today, &rows),
                rows: &rows,
                empty: "해당하는 할 일이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        ScheduleCommands::Facilities => {
            let rows: Vec<FacilityRow> = nearest_facilities(&facilities)
                .into_iter()
                .map(FacilityRow::from)
                .collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("facilities", ctx.today, &rows),
                rows: &rows,
                empty: "주변 시설 정보가 없습니다.",
            }
            .emit(out, ctx.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::export::OutputFormat;

    fn run(cmd: ScheduleCommands, format: OutputFormat) -> String {
        let ctx = Context::new(Settings::default(), chrono::NaiveDate::from_ymd_opt(2024, 1, 8), format);
        let mut out = Vec::new();
        handle_schedule_command(&ctx, cmd, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let text = run(ScheduleCommands::Summary, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["data"]["summary"]["pending"], 2);
        assert_eq!(value["data"]["summary"]["overdue"], 1);
        assert_eq!(value["data"]["summary"]["completed"], 1);
    }

    #[test]
    fn test_overdue_filter() {
        let text = run(
            ScheduleCommands::Tasks {
                status: Some(StatusFilter::Overdue),
            },
            OutputFormat::Csv,
        );
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("분리수거"));
    }

    #[test]
    fn test_facilities_closest_first() {
        let text = run(ScheduleCommands::Facilities, OutputFormat::Csv);
        assert!(text.lines().nth(1).unwrap().starts_with("택배함,10m"));
    }
}
