use thiserror::Error;

/// Failures while turning an uploaded file into a [`Preview`](super::model::Preview).
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type for {name}: expected .csv or .xlsx")]
    UnsupportedExtension { name: String },

    #[error("No columns to parse from file")]
    NoColumns,

    #[error("Error tokenizing data. Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] calamine::XlsxError),
}
