//! Canonical string form for cell values
//!
//! Join keys and enrichment fields are compared and emitted as strings: a
//! numeric 1001, the text "1001", and a formula whose cached result is 1001
//! must all come out as "1001". Keeping the coercion rule in one place keeps
//! it auditable; the engine never stringifies cells on its own.

use crate::error::MalformedValue;
use crate::model::CellValue;

/// Convert a cell to its canonical string form.
///
/// Computed cells normalize their cached result. Empty cells normalize to
/// the empty string. Values with no canonical decimal form are rejected
/// rather than silently mapped to a placeholder, so a malformed cell shows
/// up as an error instead of a wrong match.
pub fn normalize(value: &CellValue) -> Result<String, MalformedValue> {
    match value {
        CellValue::Null => Ok(String::new()),
        CellValue::Bool(b) => Ok(b.to_string()),
        CellValue::Int(i) => Ok(i.to_string()),
        CellValue::Float(f) => {
            if !f.is_finite() {
                return Err(MalformedValue::new(value, "not a finite number"));
            }
            Ok(f.to_string())
        }
        CellValue::Text(s) => Ok(s.clone()),
        CellValue::Date(d) => Ok(d.to_string()),
        CellValue::DateTime(dt) => Ok(dt.to_string()),
        CellValue::Computed { result, .. } => match result.as_ref() {
            CellValue::Computed { .. } => {
                Err(MalformedValue::new(value, "cached result is itself a formula"))
            }
            inner => normalize(inner),
        },
    }
}
