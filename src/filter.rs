//! Prefix filtering for membership exports
//!
//! Keeps the rows of a table whose cell in one column starts with a given
//! prefix. The shipped defaults cut a member list down to rows with a mobile
//! phone number (Korean mobile numbers start with 01).

use crate::error::TrackmatchError;
use crate::model::{CellValue, Table};
use crate::reconcile::normalize;

/// Default filter column and prefix: mobile phone numbers.
pub const DEFAULT_FILTER_COLUMN: &str = "휴대폰번호";
pub const DEFAULT_FILTER_PREFIX: &str = "01";

/// Result of a filter run
#[derive(Debug)]
pub struct FilterResult {
    /// Surviving rows, in input order, with the input's columns
    pub table: Table,
    pub kept: usize,
    pub dropped: usize,
}

/// Keep only rows whose normalized cell in `column` starts with `prefix`.
pub fn filter(table: &Table, column: &str, prefix: &str) -> Result<FilterResult, TrackmatchError> {
    let index = table
        .column_index(column)
        .ok_or_else(|| TrackmatchError::MissingColumn {
            column: column.to_string(),
            table: "input",
        })?;

    let mut output = Table::new(table.columns.clone());
    let mut dropped = 0;
    for row in &table.rows {
        let cell = row.get(index).unwrap_or(&CellValue::Null);
        let value = normalize(cell).map_err(|cause| TrackmatchError::MalformedCell {
            line: row.source_line,
            column: column.to_string(),
            cause,
        })?;
        if value.starts_with(prefix) {
            output.add_row(row.cells.clone(), row.source_line);
        } else {
            dropped += 1;
        }
    }

    let kept = output.row_count();
    Ok(FilterResult {
        table: output,
        kept,
        dropped,
    })
}
