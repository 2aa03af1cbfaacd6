//! Fridge and shopping CLI commands

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;

use super::Context;
use crate::display::fridge::{format_fridge_overview, InventoryRow, RecipeRow, ShoppingRow};
use crate::error::{HomekeeperError, HomekeeperResult};
use crate::export::{JsonDocument, Report};
use crate::fixtures;
use crate::models::InventoryDraft;
use crate::services::{AvailabilityPolicy, FridgeSummary, Pantry};

/// Fridge subcommands
#[derive(Subcommand, Debug)]
pub enum FridgeCommands {
    /// Show fridge contents with their expiry status
    Summary,

    /// List items that are expired or about to expire
    Expiring,

    /// List recipes and whether they can be cooked
    Recipes {
        /// Decide availability from the fridge contents instead of the stored flag
        #[arg(long)]
        match_inventory: bool,
    },

    /// Show the shopping list
    Shopping {
        /// Check or uncheck an entry by name before listing
        #[arg(short, long)]
        toggle: Option<String>,
    },

    /// Add an item to the fridge and show the updated overview
    Add {
        /// Item name
        name: String,
        /// Quantity (positive whole number)
        quantity: String,
        /// Unit, e.g. "개" or "g"
        unit: String,
        /// Expiry date (YYYY-MM-DD)
        expiry: String,
    },
}

#[derive(Debug, Serialize)]
struct FridgeDocument<'a> {
    summary: &'a FridgeSummary,
    items: &'a [InventoryRow],
}

/// Handle a fridge command
pub fn handle_fridge_command<W: Write>(
    ctx: &Context,
    cmd: FridgeCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    let mut pantry = fixtures::pantry(ctx.settings.expiry_warning_days);

    match cmd {
        FridgeCommands::Summary => write_summary(ctx, &pantry, out),

        FridgeCommands::Expiring => {
            let rows: Vec<InventoryRow> = pantry
                .expiring(ctx.today)
                .into_iter()
                .map(|(item, expiry)| InventoryRow::new(item, expiry))
                .collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("expiring", ctx.today, &rows),
                rows: &rows,
                empty: "유통기한이 임박한 재료가 없습니다.",
            }
            .emit(out, ctx.format)
        }

        FridgeCommands::Recipes { match_inventory } => {
            let policy = if match_inventory {
                AvailabilityPolicy::MatchInventory
            } else {
                AvailabilityPolicy::Stored
            };
            let rows: Vec<RecipeRow> = pantry
                .recipe_book(ctx.today, policy)
                .iter()
                .map(|(recipe, availability)| RecipeRow::new(recipe, availability))
                .collect();

            Report {
                overview: String::new(),
                document: &JsonDocument::new("recipes", ctx.today, &rows),
                rows: &rows,
                empty: "레시피가 없습니다.",
            }
            .emit(out, ctx.format)
        }

        FridgeCommands::Shopping { toggle } => {
            if let Some(name) = toggle {
                let id = pantry
                    .shopping()
                    .iter()
                    .find(|s| s.name == name.trim())
                    .map(|s| s.id)
                    .ok_or_else(|| HomekeeperError::shopping_item_not_found(name.clone()))?;
                pantry.toggle_shopping(id)?;
            }

            let rows: Vec<ShoppingRow> = pantry.shopping().iter().map(ShoppingRow::from).collect();
            let summary = pantry.summary(ctx.today, AvailabilityPolicy::Stored);

            Report {
                overview: format!("장보기 완료 {}", summary.shopping_progress()),
                document: &JsonDocument::new("shopping", ctx.today, &rows),
                rows: &rows,
                empty: "장보기 목록이 비어 있습니다.",
            }
            .emit(out, ctx.format)
        }

        FridgeCommands::Add {
            name,
            quantity,
            unit,
            expiry,
        } => {
            let draft = InventoryDraft {
                name,
                quantity,
                unit,
                expiry_date: expiry,
            };
            pantry.add_item(&draft)?;
            write_summary(ctx, &pantry, out)
        }
    }
}

fn write_summary<W: Write>(ctx: &Context, pantry: &Pantry, out: &mut W) -> HomekeeperResult<()> {
    let summary = pantry.summary(ctx.today, AvailabilityPolicy::Stored);
    let rows: Vec<InventoryRow> = pantry
        .items()
        .iter()
        .map(|item| InventoryRow::new(item, pantry.expiry_of(item, ctx.today)))
        .collect();
    let document = FridgeDocument {
        summary: &summary,
        items: &rows,
    };

    Report {
        overview: format_fridge_overview(&summary),
        document: &JsonDocument::new("fridge", ctx.today, &document),
        rows: &rows,
        empty: "냉장고가 비어 있습니다.",
    }
    .emit(out, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::export::OutputFormat;
    use chrono::NaiveDate;

    fn ctx(format: OutputFormat) -> Context {
        Context::new(
            Settings::default(),
            NaiveDate::from_ymd_opt(2024, 1, 8),
            format,
        )
    }

    fn run(ctx: &Context, cmd: FridgeCommands) -> HomekeeperResult<String> {
        let mut out = Vec::new();
        handle_fridge_command(ctx, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_expiring_sorted_soonest_first() {
        let text = run(&ctx(OutputFormat::Csv), FridgeCommands::Expiring).unwrap();
        let names: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap())
            .collect();
        assert_eq!(names, vec!["우유", "닭가슴살", "계란"]);
    }

    #[test]
    fn test_recipes_under_inventory_policy() {
        let cmd = FridgeCommands::Recipes {
            match_inventory: true,
        };
        let text = run(&ctx(OutputFormat::Json), cmd).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let recipes = value["data"].as_array().unwrap();
        // 밥 and 파 are not in the fridge
        assert_eq!(recipes[0]["available"], "불가");
        assert_eq!(recipes[0]["missing"], "밥, 파");
    }

    #[test]
    fn test_toggle_shopping_by_name() {
        let cmd = FridgeCommands::Shopping {
            toggle: Some("파스타면".into()),
        };
        let text = run(&ctx(OutputFormat::Table), cmd).unwrap();
        assert!(text.starts_with("장보기 완료 2/4"));

        let cmd = FridgeCommands::Shopping {
            toggle: Some("바나나".into()),
        };
        assert!(run(&ctx(OutputFormat::Table), cmd).unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let cmd = FridgeCommands::Add {
            name: "두부".into(),
            quantity: "1".into(),
            unit: "모".into(),
            expiry: "next week".into(),
        };
        assert!(run(&ctx(OutputFormat::Table), cmd).unwrap_err().is_validation());
    }
}
