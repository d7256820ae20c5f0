//! CSV file writer

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Table;

use super::Writer;

/// Writer for CSV files
pub struct CsvWriter;

impl Writer for CsvWriter {
    fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        writer.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
        for row in &table.rows {
            writer.write_record(row.cells.iter().map(|c| c.display().into_owned()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv")
    }
}
