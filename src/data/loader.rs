use std::io::Cursor;
use std::iter;

use calamine::{Data, Range, Reader, Xlsx};

use super::error::UploadError;
use super::model::{CellValue, ColumnType, Sheet, Table};

/// Cell texts read as missing values.
const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "#N/A", "NULL", "null", "NaN", "nan", "-NaN", "None",
];

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV bytes into a single flat table.
///
/// The first non-blank line is the header. Rows with fewer fields than the
/// header are padded with nulls; rows with more are rejected. Column dtypes
/// are inferred over the whole column, and any column that is not uniformly
/// numeric/boolean keeps its original text.
pub fn load_csv(bytes: &[u8]) -> Result<Table, UploadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Err(UploadError::NoColumns),
    };
    let width = header.len();

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for result in records {
        let record = result?;
        if record.len() > width {
            return Err(UploadError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: width,
                found: record.len(),
            });
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        raw_rows.push(row);
    }

    let mut typed: Vec<Vec<CellValue>> = raw_rows
        .iter()
        .map(|row| row.iter().map(|s| guess_cell(s)).collect())
        .collect();

    // Object columns keep their original text, except bools padded with
    // nulls, which stay `True`/`False` next to `NaN`.
    for c in 0..width {
        let object = ColumnType::infer(typed.iter().map(|r| &r[c])) == ColumnType::Text;
        let bools_and_nulls = typed
            .iter()
            .all(|r| matches!(r[c], CellValue::Bool(_) | CellValue::Null));
        if object && !bools_and_nulls {
            for (row, raw) in typed.iter_mut().zip(&raw_rows) {
                if !row[c].is_null() {
                    row[c] = CellValue::Text(raw[c].clone());
                }
            }
        }
    }

    Ok(Table::new(header, typed))
}

fn is_null_marker(s: &str) -> bool {
    NULL_MARKERS.contains(&s.trim())
}

fn guess_cell(s: &str) -> CellValue {
    if is_null_marker(s) {
        return CellValue::Null;
    }
    let t = s.trim();
    if let Ok(i) = t.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = t.parse::<f64>() {
        return CellValue::Float(f);
    }
    if t.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if t.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

/// Parse `.xlsx` bytes into one table per worksheet, in workbook order.
pub fn load_excel(bytes: &[u8]) -> Result<Vec<Sheet>, UploadError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names().to_owned();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        sheets.push(Sheet {
            table: range_to_table(&range),
            name,
        });
    }
    Ok(sheets)
}

/// First used row is the header. Empty columns left of the used range are
/// kept, so they show up as `Unnamed: i`.
fn range_to_table(range: &Range<Data>) -> Table {
    if range.is_empty() {
        return Table::empty();
    }
    let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Table::empty();
    };

    let header: Vec<String> = iter::repeat(String::new())
        .take(lead)
        .chain(header_row.iter().map(header_text))
        .collect();

    let body: Vec<Vec<CellValue>> = rows
        .map(|row| {
            iter::repeat(CellValue::Null)
                .take(lead)
                .chain(row.iter().map(excel_cell))
                .collect()
        })
        .collect();

    Table::new(header, body)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => excel_cell(other).to_string(),
    }
}

fn excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) if is_null_marker(s) => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        // xlsx stores every number as a double.
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => CellValue::Integer(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::DateTime(naive.to_string()),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}
