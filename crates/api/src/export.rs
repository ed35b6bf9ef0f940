//! Spreadsheet export of filtered collections.
//!
//! Export always serializes the *filtered* record sequence, never a single
//! page -- an operator searching for "rose" gets every matching row in the
//! file regardless of what the table currently shows.

use rust_xlsxwriter::{Workbook, XlsxError};
use serde_json::Value;

/// MIME type for `.xlsx` downloads.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Build an xlsx workbook with one sheet: a header row of column names
/// followed by one row per record. Missing fields leave blank cells;
/// numbers stay numbers, everything else is written as display text.
pub fn workbook_bytes(
    sheet_name: &str,
    columns: &[&str],
    rows: &[Value],
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    for (row_idx, record) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col_idx, column) in columns.iter().enumerate() {
            let col = col_idx as u16;
            match record.get(*column) {
                Some(Value::Number(n)) => {
                    worksheet.write_number(row, col, n.as_f64().unwrap_or(0.0))?;
                }
                Some(Value::String(s)) => {
                    worksheet.write_string(row, col, s)?;
                }
                Some(Value::Bool(b)) => {
                    worksheet.write_string(row, col, &b.to_string())?;
                }
                Some(Value::Null) | None => {}
                Some(other) => {
                    // Arrays/objects (variants, items) are flattened to JSON text.
                    worksheet.write_string(row, col, &other.to_string())?;
                }
            }
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_non_empty_workbook() {
        let rows = vec![
            json!({"_id": "1", "name": "Flowers", "price": 12.5, "active": true}),
            json!({"_id": "2", "name": "Gift Sets"}),
        ];
        let bytes = workbook_bytes("Categories", &["_id", "name", "price", "active"], &rows)
            .expect("workbook should build");
        assert!(!bytes.is_empty());
        // xlsx files are zip archives; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_collection_still_yields_header_sheet() {
        let bytes = workbook_bytes("Users", &["_id", "name"], &[]).expect("workbook should build");
        assert!(!bytes.is_empty());
    }
}
