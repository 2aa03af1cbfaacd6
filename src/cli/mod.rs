//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service layer. Handlers write to the writer they
//! are given so the binary can pass stdout and tests can pass a buffer.

pub mod auth;
pub mod budget;
pub mod calendar;
pub mod community;
pub mod config;
pub mod fridge;
pub mod routes;
pub mod schedule;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::export::OutputFormat;

pub use auth::{handle_auth_command, AuthCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use calendar::{handle_calendar_command, CalendarCommands};
pub use community::{
    handle_community_command, handle_emergency_command, handle_items_command, CommunityCommands,
    EmergencyCommands, ItemsArgs,
};
pub use config::{handle_config_command, ConfigCommands};
pub use fridge::{handle_fridge_command, FridgeCommands};
pub use routes::{handle_routes_command, RoutesCommands};
pub use schedule::{handle_schedule_command, ScheduleCommands};

/// Everything a handler needs besides its own arguments
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    /// The date all derived figures are computed against
    pub today: NaiveDate,
    pub format: OutputFormat,
}

impl Context {
    /// `today_override` (from `--today`) beats the settings file, which beats the clock
    pub fn new(settings: Settings, today_override: Option<NaiveDate>, format: OutputFormat) -> Self {
        let today = today_override.unwrap_or_else(|| settings.today());
        Self {
            settings,
            today,
            format,
        }
    }
}
