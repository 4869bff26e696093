use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single parsed cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the common DataFrame dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date/time rendered as text, e.g. `2024-03-01 09:30:00`.
    DateTime(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::DateTime(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Integral floats keep a trailing `.0` so they read as float64.
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred dtype of a whole column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Bool,
    DateTime,
    Text,
    /// Every cell is null.
    Empty,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "int64",
            ColumnType::Float => "float64",
            ColumnType::Bool => "bool",
            ColumnType::DateTime => "datetime",
            ColumnType::Text => "object",
            ColumnType::Empty => "empty",
        };
        f.write_str(name)
    }
}

impl ColumnType {
    /// Infer the dtype of a column of already-typed cells.
    ///
    /// * only nulls            → `Empty`
    /// * only integers         → `Integer`
    /// * numbers (with nulls)  → `Float`, unless all non-null are integers and there are no nulls
    /// * only bools            → `Bool`; with nulls it becomes `Text` (object)
    /// * only datetimes (with nulls) → `DateTime`
    /// * anything else         → `Text`
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let (mut ints, mut floats, mut bools, mut dates, mut texts, mut nulls) = (0, 0, 0, 0, 0, 0);
        for cell in cells {
            match cell {
                CellValue::Integer(_) => ints += 1,
                CellValue::Float(_) => floats += 1,
                CellValue::Bool(_) => bools += 1,
                CellValue::DateTime(_) => dates += 1,
                CellValue::Text(_) => texts += 1,
                CellValue::Null => nulls += 1,
            }
        }
        let non_null = ints + floats + bools + dates + texts;
        if non_null == 0 {
            return ColumnType::Empty;
        }
        if ints == non_null && nulls == 0 {
            ColumnType::Integer
        } else if ints + floats == non_null {
            ColumnType::Float
        } else if bools == non_null && nulls == 0 {
            ColumnType::Bool
        } else if dates == non_null {
            ColumnType::DateTime
        } else {
            ColumnType::Text
        }
    }
}

// ---------------------------------------------------------------------------
// Table – one flat DataFrame
// ---------------------------------------------------------------------------

/// A flat table: named columns, one inferred dtype per column, row-major cells.
///
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub dtypes: Vec<ColumnType>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from a header and typed rows.
    ///
    /// Header names are normalised (`Unnamed: i`, duplicate mangling), short
    /// rows are padded with nulls and integer columns that need widening
    /// are converted to floats.
    pub fn new(header: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let columns = normalize_headers(header);
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, CellValue::Null);
        }

        let dtypes: Vec<ColumnType> = (0..width)
            .map(|c| ColumnType::infer(rows.iter().map(|r| &r[c])))
            .collect();

        for (c, dtype) in dtypes.iter().enumerate() {
            if *dtype == ColumnType::Float {
                for row in &mut rows {
                    if let CellValue::Integer(i) = row[c] {
                        row[c] = CellValue::Float(i as f64);
                    }
                }
            }
        }

        Table {
            columns,
            dtypes,
            rows,
        }
    }

    /// An empty table (no columns, no rows).
    pub fn empty() -> Self {
        Table {
            columns: Vec::new(),
            dtypes: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// `(rows, columns)`, like `DataFrame.shape`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

#[cfg(test)]
impl Table {
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let c = self.columns.iter().position(|n| n == column)?;
        self.rows.get(row).map(|r| &r[c])
    }

    pub fn dtype(&self, column: &str) -> Option<ColumnType> {
        let c = self.columns.iter().position(|n| n == column)?;
        Some(self.dtypes[c])
    }
}

/// Replace blank header cells with `Unnamed: <index>` and suffix repeated
/// names with `.1`, `.2`, ...
pub fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for (i, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut n = 0;
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{base}.{n}");
        }
        out.push(candidate);
    }
    out
}

// ---------------------------------------------------------------------------
// Preview – what a single upload parses into
// ---------------------------------------------------------------------------

/// One worksheet of an Excel workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

/// Parsed content of one uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// CSV: a single flat table.
    Table(Table),
    /// Excel: every sheet, in workbook order.
    Workbook(Vec<Sheet>),
}

#[cfg(test)]
impl Preview {
    /// Look up a sheet by name (workbooks only).
    pub fn sheet(&self, name: &str) -> Option<&Table> {
        match self {
            Preview::Table(_) => None,
            Preview::Workbook(sheets) => sheets.iter().find(|s| s.name == name).map(|s| &s.table),
        }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        match self {
            Preview::Table(_) => Vec::new(),
            Preview::Workbook(sheets) => sheets.iter().map(|s| s.name.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn blank_and_duplicate_headers_are_renamed() {
        let cols = normalize_headers(vec![s("site"), s(""), s("site"), s("site"), s(" ")]);
        assert_eq!(cols, vec!["site", "Unnamed: 1", "site.1", "site.2", "Unnamed: 4"]);
    }

    #[test]
    fn integer_column_with_null_widens_to_float() {
        let table = Table::new(
            vec![s("ntu")],
            vec![vec![CellValue::Integer(3)], vec![CellValue::Null]],
        );
        assert_eq!(table.dtypes, vec![ColumnType::Float]);
        assert_eq!(table.rows[0][0], CellValue::Float(3.0));
        assert!(table.rows[1][0].is_null());
    }

    #[test]
    fn short_rows_are_padded() {
        let table = Table::new(
            vec![s("a"), s("b")],
            vec![vec![CellValue::Integer(1)]],
        );
        assert_eq!(table.shape(), (1, 2));
        assert_eq!(table.cell(0, "b"), Some(&CellValue::Null));
        assert_eq!(table.dtype("b"), Some(ColumnType::Empty));
    }

    #[test]
    fn integral_float_keeps_decimal_point() {
        assert_eq!(CellValue::Float(3.0).to_string(), "3.0");
        assert_eq!(CellValue::Float(-12.0).to_string(), "-12.0");
        assert_eq!(CellValue::Float(0.25).to_string(), "0.25");
        assert_eq!(CellValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(CellValue::Integer(3).to_string(), "3");
    }

    #[test]
    fn bool_column_with_null_is_object() {
        let with_null = ColumnType::infer(&[CellValue::Bool(true), CellValue::Null]);
        assert_eq!(with_null, ColumnType::Text);
        let all_bools = ColumnType::infer(&[CellValue::Bool(true), CellValue::Bool(false)]);
        assert_eq!(all_bools, ColumnType::Bool);
    }

    #[test]
    fn mixed_text_column_is_object() {
        let dtype = ColumnType::infer(&[CellValue::Integer(1), CellValue::Text(s("x"))]);
        assert_eq!(dtype, ColumnType::Text);
        assert_eq!(dtype.to_string(), "object");
    }

    #[test]
    fn sheet_lookup_only_applies_to_workbooks() {
        let wb = Preview::Workbook(vec![
            Sheet { name: s("Lab"), table: Table::empty() },
            Sheet { name: s("Rain"), table: Table::empty() },
        ]);
        assert_eq!(wb.sheet_names(), vec!["Lab", "Rain"]);
        assert!(wb.sheet("Rain").is_some());
        assert!(wb.sheet("Flow").is_none());
        assert!(Preview::Table(Table::empty()).sheet("Lab").is_none());
    }
}
