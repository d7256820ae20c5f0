//! Excel file writer (xlsx)

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Formula, Workbook, Worksheet};

use crate::model::{CellValue, Table};

use super::Writer;

/// Writer for xlsx files
pub struct ExcelWriter;

impl Writer for ExcelWriter {
    fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, column) in table.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, column.name.as_str())?;
        }

        for (r, row) in table.rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate() {
                write_cell(worksheet, (r + 1) as u32, c as u16, cell)?;
            }
        }

        workbook
            .save(path)
            .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
        Ok(())
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "xlsx")
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Null => {}
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        CellValue::Int(i) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        CellValue::Float(f) => {
            worksheet.write_number(row, col, *f)?;
        }
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        CellValue::Date(d) => {
            worksheet.write_string(row, col, d.to_string().as_str())?;
        }
        CellValue::DateTime(dt) => {
            worksheet.write_string(row, col, dt.to_string().as_str())?;
        }
        CellValue::Computed { formula, .. } => {
            worksheet.write_formula(row, col, Formula::new(formula.as_str()))?;
        }
    }
    Ok(())
}
