//! Service layer for Homekeeper
//!
//! Each page's derived values are computed here as plain functions and small
//! owner types over immutable inputs, independent of any front end.

pub mod budget;
pub mod calendar;
pub mod community;
pub mod fridge;
pub mod schedule;

pub use budget::{BudgetSummary, CategorySpending, ExpenseLedger};
pub use calendar::{CalendarCell, CalendarSummary};
pub use community::{CommunitySummary, EmergencySummary, ItemSort, ItemsSummary};
pub use fridge::{AvailabilityPolicy, Expiry, ExpiryStatus, FridgeSummary, Pantry, RecipeAvailability};
pub use schedule::ScheduleSummary;
