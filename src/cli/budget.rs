//! Budget CLI commands
//!
//! Overview, expense listing and expense entry for the budget page. Entries
//! are appended to this run's copy of the sample ledger.

use std::io::Write;

use chrono::NaiveDate;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::display::budget::{format_budget_overview, CategoryRow, ExpenseRow};
use crate::error::HomekeeperResult;
use crate::export::{JsonDocument, Report};
use crate::fixtures;
use crate::models::{ExpenseCategory, ExpenseDraft};
use crate::services::{BudgetSummary, ExpenseLedger};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show spending against the monthly budget, by category
    Summary,

    /// List expenses
    List {
        /// First date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Record an expense and show the updated overview
    Add {
        /// Amount in won (e.g., "25000" or "25,000")
        amount: String,
        /// Category code or Korean name (e.g., "food" or "식비")
        category: String,
        /// What the money was spent on
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List expense categories
    Categories,
}

/// Budget figures as exported to JSON/YAML
#[derive(Debug, Serialize)]
struct BudgetDocument<'a> {
    #[serde(flatten)]
    summary: &'a BudgetSummary,
    usage_percent: Option<f64>,
    progress_fill: f64,
    at_risk: bool,
    over_budget: bool,
}

#[derive(Debug, Tabled, Serialize)]
struct CategoryCodeRow {
    #[tabled(rename = "코드")]
    code: &'static str,
    #[tabled(rename = "이름")]
    label: &'static str,
}

/// Handle a budget command
pub fn handle_budget_command<W: Write>(
    ctx: &Context,
    cmd: BudgetCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let mut ledger = ExpenseLedger::new(fixtures::expenses());

    match cmd {
        BudgetCommands::Summary => write_summary(ctx, &ledger, out),

        BudgetCommands::List { from, to } => {
            let start = from.unwrap_or(NaiveDate::MIN);
            let end = to.unwrap_or(NaiveDate::MAX);
            let expenses = ledger.between(start, end);
            let rows: Vec<ExpenseRow> = expenses.iter().map(|e| ExpenseRow::from(*e)).collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("expenses", ctx.today, &expenses),
                rows: &rows,
                empty: "지출 내역이 없습니다.",
            }
            .emit(out, ctx.format)
        }

        BudgetCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let draft = ExpenseDraft {
                amount,
                category,
                description,
                date,
            };
            ledger.add(&draft, ctx.today)?;
            write_summary(ctx, &ledger, out)
        }

        BudgetCommands::Categories => {
            let rows: Vec<CategoryCodeRow> = ExpenseCategory::all()
                .iter()
                .map(|c| CategoryCodeRow {
                    code: c.code(),
                    label: c.label(),
                })
                .collect();

            Report {
                overview: String::new(),
                document: &rows,
                rows: &rows,
                empty: "",
            }
            .emit(out, ctx.format)
        }
    }
}

fn write_summary<W: Write>(ctx: &Context, ledger: &ExpenseLedger, out: &mut W) -> HomekeeperResult<()> {
    let alert = ctx.settings.usage_alert_percent;
    let summary = ledger.summary(ctx.settings.monthly_budget);
    let document = BudgetDocument {
        summary: &summary,
        usage_percent: summary.usage_percent(),
        progress_fill: summary.progress_fill(),
        at_risk: summary.is_at_risk(alert),
        over_budget: summary.is_over_budget(),
    };
    let rows: Vec<CategoryRow> = summary.by_category.iter().map(CategoryRow::from).collect();

    Report {
        overview: format_budget_overview(&summary, alert),
        document: &JsonDocument::new("budget", ctx.today, &document),
        rows: &rows,
        empty: "지출 내역이 없습니다.",
    }
    .emit(out, ctx.format)
}
