//! CSV output of table rows

use std::io::Write;

use serde::Serialize;

use super::export_error;
use crate::error::HomekeeperResult;

/// Write `rows` as CSV with a header taken from the field names
pub fn write_csv<W: Write, R: Serialize>(writer: &mut W, rows: &[R]) -> HomekeeperResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row).map_err(export_error)?;
    }
    csv_writer.flush().map_err(export_error)
}
