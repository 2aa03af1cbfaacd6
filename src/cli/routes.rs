//! Route table and navigation menu commands

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;

use super::Context;
use crate::display::navigation::{format_decision, MenuRow, RouteRow};
use crate::error::HomekeeperResult;
use crate::export::{export_error, write_json, write_yaml, JsonDocument, OutputFormat, Report};
use crate::navigation::{self, RouteDecision, HOME_PATH, MENU, ROUTES};

/// Routing subcommands
#[derive(Subcommand, Debug)]
pub enum RoutesCommands {
    /// Every known page and whether it needs a login
    List,

    /// Navigation menu with the current page marked
    Menu {
        #[arg(short, long, default_value = HOME_PATH)]
        current: String,
    },

    /// What happens when `path` is opened
    Resolve {
        path: String,
        /// Resolve as a signed-in user
        #[arg(long)]
        signed_in: bool,
    },
}

#[derive(Debug, Serialize)]
struct ResolveDocument<'a> {
    path: &'a str,
    signed_in: bool,
    #[serde(flatten)]
    decision: &'a RouteDecision,
}

/// Handle a routes command
pub fn handle_routes_command<W: Write>(
    ctx: &Context,
    cmd: RoutesCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    match cmd {
        RoutesCommands::List => {
            let rows: Vec<RouteRow> = ROUTES.iter().map(RouteRow::from).collect();
            Report {
                overview: String::new(),
                document: &JsonDocument::new("routes", ctx.today, &rows),
                rows: &rows,
                empty: "",
            }
            .emit(out, ctx.format)
        }

        RoutesCommands::Menu { current } => {
            let rows: Vec<MenuRow> = MENU.iter().map(|e| MenuRow::new(e, &current)).collect();
            Report {
                overview: String::new(),
                document: &JsonDocument::new("menu", ctx.today, &rows),
                rows: &rows,
                empty: "",
            }
            .emit(out, ctx.format)
        }

        RoutesCommands::Resolve { path, signed_in } => {
            let decision = navigation::resolve(path.trim(), signed_in)?;
            let document = ResolveDocument {
                path: path.trim(),
                signed_in,
                decision: &decision,
            };
            match ctx.format {
                OutputFormat::Json => write_json(out, &JsonDocument::new("route", ctx.today, &document)),
                OutputFormat::Yaml => write_yaml(out, &JsonDocument::new("route", ctx.today, &document)),
                OutputFormat::Table | OutputFormat::Csv => {
                    writeln!(out, "{}", format_decision(path.trim(), &decision)).map_err(export_error)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;

    fn run(cmd: RoutesCommands, format: OutputFormat) -> HomekeeperResult<String> {
        let ctx = Context::new(Settings::default(), chrono::NaiveDate::from_ymd_opt(2024, 1, 8), format);
        let mut out = Vec::new();
        handle_routes_command(&ctx, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_has_every_route() {
        let text = run(RoutesCommands::List, OutputFormat::Csv).unwrap();
        assert_eq!(text.lines().count(), ROUTES.len() + 1);
        assert!(text.contains("/profile,profile,예"));
    }

    #[test]
    fn test_menu_marks_current() {
        let text = run(
            RoutesCommands::Menu {
                current: "/budget".into(),
            },
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["data"][1]["active"], "▶");
        assert_eq!(value["data"][0]["active"], "");
    }

    #[test]
    fn test_resolve_protected() {
        let text = run(
            RoutesCommands::Resolve {
                path: "/profile".into(),
                signed_in: false,
            },
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["data"]["action"], "redirect");
        assert_eq!(value["data"]["to"], "/login");

        let text = run(
            RoutesCommands::Resolve {
                path: "/profile".into(),
                signed_in: true,
            },
            OutputFormat::Table,
        )
        .unwrap();
        assert_eq!(text.trim(), "/profile -> profile");
    }

    #[test]
    fn test_resolve_unknown() {
        let err = run(
            RoutesCommands::Resolve {
                path: "/nowhere".into(),
                signed_in: true,
            },
            OutputFormat::Table,
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
