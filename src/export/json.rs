//! JSON output
//!
//! Documents are wrapped in a small envelope carrying the schema version and
//! the date the figures were computed for.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::export_error;
use crate::error::HomekeeperResult;

/// Version of the JSON/YAML document layout
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Envelope around a page's data
#[derive(Debug, Clone, Serialize)]
pub struct JsonDocument<'a, T: Serialize> {
    pub schema_version: &'static str,
    pub app_version: &'static str,
    /// The "today" every derived figure was computed against
    pub as_of: NaiveDate,
    pub page: &'static str,
    pub data: &'a T,
}

impl<'a, T: Serialize> JsonDocument<'a, T> {
    pub fn new(page: &'static str, as_of: NaiveDate, data: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            as_of,
            page,
            data,
        }
    }
}

/// Pretty-print `value` followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> HomekeeperResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(export_error)?;
    writeln!(writer).map_err(export_error)
}
