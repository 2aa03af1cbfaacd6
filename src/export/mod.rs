//! Output formats for the dashboard commands
//!
//! - Table: text overview followed by a `tabled` table
//! - JSON / YAML: the full page document, for scripting
//! - CSV: the table rows only, spreadsheet-compatible
//!
//! Everything goes to the given writer; nothing is written to disk.

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use tabled::Tabled;

use crate::display::render_table;
use crate::error::{HomekeeperError, HomekeeperResult};

pub use self::csv::write_csv;
pub use json::{write_json, JsonDocument, EXPORT_SCHEMA_VERSION};
pub use yaml::write_yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Text overview and table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// CSV rows
    Csv,
}

/// One page worth of output in every format
pub struct Report<'a, D, R> {
    /// Text shown above the table
    pub overview: String,
    /// Serialized for JSON and YAML
    pub document: &'a D,
    /// Rendered as the table and as CSV records
    pub rows: &'a [R],
    /// Shown instead of an empty table
    pub empty: &'a str,
}

impl<'a, D, R> Report<'a, D, R>
where
    D: Serialize,
    R: Tabled + Serialize,
{
    pub fn emit<W: Write>(&self, writer: &mut W, format: OutputFormat) -> HomekeeperResult<()> {
        match format {
            OutputFormat::Table => {
                let table = render_table(self.rows, self.empty);
                let text = if self.overview.is_empty() {
                    table
                } else {
                    format!("{}\n\n{}", self.overview, table)
                };
                writeln!(writer, "{}", text).map_err(export_error)
            }
            OutputFormat::Json => write_json(writer, self.document),
            OutputFormat::Yaml => write_yaml(writer, self.document),
            OutputFormat::Csv => write_csv(writer, self.rows),
        }
    }
}

pub(crate) fn export_error(e: impl std::fmt::Display) -> HomekeeperError {
    HomekeeperError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::navigation::RouteRow;
    use crate::navigation::ROUTES;

    fn routes() -> Vec<RouteRow> {
        ROUTES.iter().map(RouteRow::from).collect()
    }

    #[test]
    fn test_table_includes_overview() {
        let rows = routes();
        let report = Report {
            overview: "경로 목록".to_string(),
            document: &rows,
            rows: &rows,
            empty: "",
        };
        let mut out = Vec::new();
        report.emit(&mut out, OutputFormat::Table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("경로 목록\n\n"));
        assert!(text.contains("/profile"));
    }

    #[test]
    fn test_csv_has_one_record_per_row() {
        let rows = routes();
        let report = Report {
            overview: String::new(),
            document: &rows,
            rows: &rows,
            empty: "",
        };
        let mut out = Vec::new();
        report.emit(&mut out, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(out).unwrap();
        // header plus twelve routes
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn test_empty_rows_message() {
        let rows: Vec<RouteRow> = Vec::new();
        let report = Report {
            overview: String::new(),
            document: &rows,
            rows: &rows,
            empty: "표시할 항목이 없습니다.",
        };
        let mut out = Vec::new();
        report.emit(&mut out, OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "표시할 항목이 없습니다.\n");
    }
}
