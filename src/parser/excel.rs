//! Excel file parser (xlsx, xls, ods)

use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use rustc_hash::FxHashMap;

use crate::model::{CellValue, Column, Table};

use super::Parser;

/// Parser for Excel files
pub struct ExcelParser;

impl Parser for ExcelParser {
    fn parse(&self, path: &Path, sheet: Option<&str>) -> Result<Table> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

        // Get sheet name
        let sheet_name = match sheet {
            Some(name) => name.to_string(),
            None => {
                // Use first sheet
                let sheets = workbook.sheet_names();
                if sheets.is_empty() {
                    bail!("No sheets found in workbook");
                }
                sheets[0].clone()
            }
        };

        // Get the sheet range
        let range: Range<Data> = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

        // Formula cells: the data range carries only the cached value, the
        // formula text lives in a parallel range. Sheets without a formula
        // part just yield no entries.
        let formulas = workbook
            .worksheet_formula(&sheet_name)
            .map(collect_formulas)
            .unwrap_or_default();

        // Parse range into table
        parse_range(range, &formulas)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "xlsx" | "xls" | "ods" | "xlsm")
    }
}

/// Index formula text by absolute (row, col) position.
fn collect_formulas(range: Range<String>) -> FxHashMap<(u32, u32), String> {
    let mut formulas = FxHashMap::default();
    let (start_row, start_col) = match range.start() {
        Some(start) => start,
        None => return formulas,
    };
    for (r, row) in range.rows().enumerate() {
        for (c, formula) in row.iter().enumerate() {
            if !formula.is_empty() {
                formulas.insert((start_row + r as u32, start_col + c as u32), formula.clone());
            }
        }
    }
    formulas
}

fn parse_range(range: Range<Data>, formulas: &FxHashMap<(u32, u32), String>) -> Result<Table> {
    let (row_count, col_count) = range.get_size();

    if row_count == 0 {
        bail!("Empty sheet");
    }

    let (start_row, start_col) = range.start().context("Empty sheet")?;

    // First row is header
    let header_row = range.rows().next().context("No header row found")?;
    let columns: Vec<Column> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell_to_string(cell);
            Column::new(
                if name.is_empty() {
                    format!("Column{}", i + 1)
                } else {
                    name
                },
                i,
            )
        })
        .collect();

    let mut table = Table::new(columns);

    // Read data rows
    for (line_num, row) in range.rows().skip(1).enumerate() {
        let mut cells: Vec<CellValue> = Vec::with_capacity(col_count);
        for (c, cell) in row.iter().take(col_count).enumerate() {
            let value = convert_cell(cell);
            let position = (start_row + line_num as u32 + 1, start_col + c as u32);
            let value = match formulas.get(&position) {
                Some(formula) => CellValue::Computed {
                    formula: formula.clone(),
                    result: Box::new(value),
                },
                None => value,
            };
            cells.push(value);
        }

        // Pad with nulls if row has fewer columns
        if cells.len() < table.column_count() {
            cells.resize(table.column_count(), CellValue::Null);
        }

        table.add_row(cells, line_num + 2); // +2 for 1-indexing and header
    }

    Ok(table)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#{:?}", e),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => {
            // Excel stores every number as a float; exact integers come back
            // as Int so identifiers normalize without a trailing ".0"
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                CellValue::Int(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let s = format!("{}", dt);
            if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f")
            {
                CellValue::DateTime(datetime)
            } else if let Ok(datetime) =
                chrono::NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
            {
                CellValue::DateTime(datetime)
            } else if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                CellValue::Date(date)
            } else {
                CellValue::Text(s)
            }
        }
        Data::DateTimeIso(s) => {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                CellValue::DateTime(dt)
            } else if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                CellValue::Date(d)
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell_integers() {
        assert_eq!(convert_cell(&Data::Float(1001.0)), CellValue::Int(1001));
        assert_eq!(convert_cell(&Data::Float(12.5)), CellValue::Float(12.5));
        assert_eq!(convert_cell(&Data::Empty), CellValue::Null);
        assert_eq!(convert_cell(&Data::String("  ".to_string())), CellValue::Null);
    }
}
