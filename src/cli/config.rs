//! Configuration commands

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;

use super::Context;
use crate::config::paths::HomekeeperPaths;
use crate::config::settings::Settings;
use crate::display::report::{format_header, labeled};
use crate::error::HomekeeperResult;
use crate::export::{export_error, write_json, write_yaml, JsonDocument, OutputFormat};

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and the effective settings
    Show,

    /// Write the settings file with the current values
    Init,
}

#[derive(Debug, Serialize)]
struct ConfigDocument<'a> {
    settings_file: String,
    initialized: bool,
    settings: &'a Settings,
}

/// Handle a config command
pub fn handle_config_command<W: Write>(
    ctx: &Context,
    paths: &HomekeeperPaths,
    cmd: ConfigCommands,
    out: &mut W,
) -> HomekeeperResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let document = ConfigDocument {
                settings_file: paths.settings_file().display().to_string(),
                initialized: paths.is_initialized(),
                settings: &ctx.settings,
            };
            match ctx.format {
                OutputFormat::Json => write_json(out, &JsonDocument::new("config", ctx.today, &document)),
                OutputFormat::Yaml => write_yaml(out, &JsonDocument::new("config", ctx.today, &document)),
                OutputFormat::Table | OutputFormat::Csv => {
                    writeln!(out, "{}", format_config(ctx, &document)).map_err(export_error)
                }
            }
        }

        ConfigCommands::Init => {
            ctx.settings.save(paths)?;
            writeln!(out, "설정 파일을 만들었습니다: {}", paths.settings_file().display())
                .map_err(export_error)
        }
    }
}

fn format_config(ctx: &Context, doc: &ConfigDocument<'_>) -> String {
    let s = doc.settings;
    let lines = [
        format_header("Homekeeper 설정"),
        labeled("설정 파일", &doc.settings_file, 14),
        labeled("초기화", if doc.initialized { "예" } else { "아니오" }, 14),
        labeled("월 예산", s.monthly_budget, 14),
        labeled("경고 기준", format!("{}%", s.usage_alert_percent), 14),
        labeled("유통기한 경고", format!("{}일", s.expiry_warning_days), 14),
        labeled("로그 레벨", &s.log_level, 14),
        labeled("기준일", ctx.today, 14),
    ];
    lines.join("\n")
}
