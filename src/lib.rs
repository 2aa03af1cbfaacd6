//! Homekeeper - dashboards for people living on their own
//!
//! This library computes the figures behind each page of the Homekeeper
//! helper: monthly budget usage, fridge expiry and recipe availability,
//! home-maintenance and calendar schedules, community and item listings,
//! emergency contacts, the authentication forms, and the navigation shell.
//! Every page works over its own in-memory list; nothing is persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file, path resolution and logging setup
//! - `error`: Custom error types and form validation messages
//! - `models`: Plain records for each page
//! - `services`: Derived values per page (budget, fridge, schedule, calendar, community)
//! - `auth`: Form validation, the authentication collaborator and submit flow
//! - `navigation`: Route table, protected-route redirect and menu
//! - `fixtures`: Sample data each page starts from
//! - `display` / `export`: Terminal tables and JSON/YAML/CSV output
//! - `cli`: Command handlers for the `homekeeper` binary
//!
//! # Example
//!
//! ```rust
//! use homekeeper::models::Money;
//! use homekeeper::services::BudgetSummary;
//!
//! let summary = BudgetSummary::compute(&homekeeper::fixtures::expenses(), Money::from_won(1_000_000));
//! assert_eq!(summary.usage_label(), "66.5%");
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod models;
pub mod navigation;
pub mod services;

pub use error::{HomekeeperError, HomekeeperResult};
