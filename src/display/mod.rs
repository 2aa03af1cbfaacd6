//! Display formatting for terminal output
//!
//! Row types render through `tabled` for the table format and serialize as
//! flat records for CSV; each page also has a short text overview.

pub mod budget;
pub mod community;
pub mod fridge;
pub mod navigation;
pub mod report;
pub mod schedule;

pub use report::render_table;
