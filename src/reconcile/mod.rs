//! Matching and enrichment engine
//!
//! Joins the fulfillment (source) table against the ERP (reference) table on
//! their normalized key columns, then copies each matched source row with the
//! reference row's tracking number and carrier code merged in. Source rows
//! with no reference match are dropped from the output; that is what the
//! downstream import expects.

mod carrier;
mod normalize;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::Config;
use crate::error::TrackmatchError;
use crate::model::{CellValue, Column, Row, Table};

pub use carrier::{CarrierResolver, UNKNOWN_CARRIER};
pub use normalize::normalize;

/// A carrier name that was absent from the code table.
///
/// Soft warning: the row still gets code [`UNKNOWN_CARRIER`] and the run
/// continues.
#[derive(Debug, Clone, Serialize)]
pub struct UnknownCarrier {
    /// Line of the reference row carrying the name
    pub line: usize,
    pub name: String,
}

/// Statistics about a reconciliation run
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReconcileStats {
    pub source_rows: usize,
    pub reference_rows: usize,
    pub matched: usize,
    pub dropped: usize,
}

/// Result of enriching a source table from a reference table
#[derive(Debug)]
pub struct ReconcileResult {
    /// Enriched output table, in source-row order
    pub table: Table,
    pub stats: ReconcileStats,
    pub unknown_carriers: Vec<UnknownCarrier>,
}

/// Main reconciliation engine
pub struct ReconcileEngine {
    config: Config,
    resolver: CarrierResolver,
}

impl ReconcileEngine {
    /// Create a new engine with configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            resolver: CarrierResolver::new(),
        }
    }

    /// Enrich `source` with tracking data looked up from `reference`.
    ///
    /// Pure over its inputs: neither table is mutated, and two calls with the
    /// same tables produce identical results.
    pub fn reconcile(
        &self,
        source: &Table,
        reference: &Table,
    ) -> Result<ReconcileResult, TrackmatchError> {
        if source.row_count() == 0 {
            return Err(TrackmatchError::EmptySource);
        }

        let source_key = require_column(source, &self.config.source_key, "source")?;
        let reference_key = require_column(reference, &self.config.reference_key, "reference")?;
        let tracking = require_column(reference, &self.config.tracking_column, "reference")?;
        let carrier = require_column(reference, &self.config.carrier_column, "reference")?;

        // Index the reference table once. Duplicate keys are not expected,
        // but if they occur the first row in file order wins.
        let mut reference_index: IndexMap<String, &Row> = IndexMap::new();
        for row in &reference.rows {
            let key = normalize_cell(row, reference_key, &self.config.reference_key)?;
            reference_index.entry(key).or_insert(row);
        }

        let (columns, tracking_idx, carrier_idx) = self.output_columns(source);
        let mut output = Table::new(columns);

        let mut stats = ReconcileStats {
            source_rows: source.row_count(),
            reference_rows: reference.row_count(),
            ..Default::default()
        };
        let mut unknown_carriers = Vec::new();

        for row in &source.rows {
            let key = normalize_cell(row, source_key, &self.config.source_key)?;
            let matched = match reference_index.get(&key) {
                Some(matched) => *matched,
                None => {
                    stats.dropped += 1;
                    continue;
                }
            };

            let tracking_value = normalize_cell(matched, tracking, &self.config.tracking_column)?;
            let carrier_name = normalize_cell(matched, carrier, &self.config.carrier_column)?;
            if !self.resolver.is_known(&carrier_name) {
                unknown_carriers.push(UnknownCarrier {
                    line: matched.source_line,
                    name: carrier_name.clone(),
                });
            }

            let mut cells = row.cells.clone();
            cells.resize(output.column_count(), CellValue::Null);
            cells[tracking_idx] = CellValue::Text(tracking_value);
            cells[carrier_idx] = CellValue::Int(self.resolver.resolve(&carrier_name));
            output.add_row(cells, row.source_line);
            stats.matched += 1;
        }

        Ok(ReconcileResult {
            table: output,
            stats,
            unknown_carriers,
        })
    }

    /// Output schema: every source column, plus the two enrichment columns.
    /// An enrichment column already present on the source is written in place
    /// instead of appended.
    fn output_columns(&self, source: &Table) -> (Vec<Column>, usize, usize) {
        let mut columns = source.columns.clone();

        let tracking_idx = match columns.iter().position(|c| c.name == self.config.tracking_output) {
            Some(idx) => idx,
            None => {
                let idx = columns.len();
                columns.push(Column::new(self.config.tracking_output.clone(), idx));
                idx
            }
        };
        let carrier_idx = match columns
            .iter()
            .position(|c| c.name == self.config.carrier_code_output)
        {
            Some(idx) => idx,
            None => {
                let idx = columns.len();
                columns.push(Column::new(self.config.carrier_code_output.clone(), idx));
                idx
            }
        };

        (columns, tracking_idx, carrier_idx)
    }
}

fn require_column(
    table: &Table,
    name: &str,
    which: &'static str,
) -> Result<usize, TrackmatchError> {
    table
        .column_index(name)
        .ok_or_else(|| TrackmatchError::MissingColumn {
            column: name.to_string(),
            table: which,
        })
}

fn normalize_cell(row: &Row, index: usize, column: &str) -> Result<String, TrackmatchError> {
    let cell = row.get(index).unwrap_or(&CellValue::Null);
    normalize(cell).map_err(|cause| TrackmatchError::MalformedCell {
        line: row.source_line,
        column: column.to_string(),
        cause,
    })
}

/// Convenience function to reconcile two tables
pub fn reconcile(
    source: &Table,
    reference: &Table,
    config: &Config,
) -> Result<ReconcileResult, TrackmatchError> {
    ReconcileEngine::new(config.clone()).reconcile(source, reference)
}
