//! Error taxonomy for reconciliation runs

use thiserror::Error;

use crate::model::CellValue;

/// Raised by the cell normalizer when a value has no canonical string form.
#[derive(Debug, Error)]
#[error("cell value {value} cannot be normalized: {reason}")]
pub struct MalformedValue {
    /// Debug rendering of the offending cell
    pub value: String,
    pub reason: &'static str,
}

impl MalformedValue {
    pub fn new(value: &CellValue, reason: &'static str) -> Self {
        Self {
            value: format!("{:?}", value),
            reason,
        }
    }
}

/// Errors raised while reconciling or filtering tables.
///
/// Unknown carrier names are deliberately not represented here: they resolve
/// to code 0 and surface as soft warnings on the run result.
#[derive(Debug, Error)]
pub enum TrackmatchError {
    /// A cell could not be normalized; annotated with its position so a
    /// malformed spreadsheet cell can be found and fixed.
    #[error("row {line}, column '{column}': {cause}")]
    MalformedCell {
        line: usize,
        column: String,
        cause: MalformedValue,
    },

    /// The source table has no data rows, so no output schema can be derived.
    #[error("source table has no data rows")]
    EmptySource,

    /// A configured column is missing from an input table.
    #[error("column '{column}' not found in the {table} table")]
    MissingColumn { column: String, table: &'static str },
}
