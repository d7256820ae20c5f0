//! Writers for emitting tables as spreadsheet files

mod csv;
mod excel;

use std::path::Path;

use anyhow::{bail, Result};

use crate::model::Table;

pub use self::csv::CsvWriter;
pub use self::excel::ExcelWriter;

/// Trait for writing a table out as a spreadsheet file
pub trait Writer: Send + Sync {
    /// Write one header row from the table's columns, then one row per data
    /// row, in order.
    fn write(&self, table: &Table, path: &Path) -> Result<()>;

    /// Check if this writer can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating writers based on file extension
pub struct WriterFactory {
    writers: Vec<Box<dyn Writer>>,
}

impl Default for WriterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterFactory {
    /// Create a new writer factory with all supported writers
    pub fn new() -> Self {
        Self {
            writers: vec![Box::new(ExcelWriter), Box::new(CsvWriter)],
        }
    }

    /// Get a writer for the given file path
    pub fn get_writer(&self, path: &Path) -> Result<&dyn Writer> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for writer in &self.writers {
            if writer.supports_extension(&ext) {
                return Ok(writer.as_ref());
            }
        }

        bail!(
            "Unsupported output format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Write a table using the appropriate writer
    pub fn write(&self, table: &Table, path: &Path) -> Result<()> {
        self.get_writer(path)?.write(table, path)
    }
}
