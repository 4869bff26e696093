use std::path::Path;

use anyhow::{Context, Result};

use super::error::UploadError;
use super::loader;
use super::model::Preview;

// ---------------------------------------------------------------------------
// UploadedFile – transient name + bytes pair
// ---------------------------------------------------------------------------

/// A file handed to the dashboard by the user. Lives only as long as the
/// current selection.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a picked file from disk; the name is the path's file name.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

// ---------------------------------------------------------------------------
// FileKind – parse strategy chosen from the file name
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Excel,
}

impl FileKind {
    /// Extensions accepted by the upload picker.
    pub const EXTENSIONS: [&'static str; 2] = ["csv", "xlsx"];

    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Some(FileKind::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(FileKind::Excel)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Csv => "CSV",
            FileKind::Excel => "Excel",
        }
    }
}

// ---------------------------------------------------------------------------
// UploadPreview – result of parsing one upload
// ---------------------------------------------------------------------------

/// What the page shows for one uploaded file.
#[derive(Debug, Clone)]
pub struct UploadPreview {
    pub file_name: String,
    /// `None` when the extension is not recognised.
    pub kind: Option<FileKind>,
    pub outcome: Result<Preview, String>,
}

impl UploadPreview {
    /// `Uploaded CSV file: <name>` / `Uploaded Excel file: <name>`.
    pub fn success_message(&self) -> Option<String> {
        match (&self.outcome, self.kind) {
            (Ok(_), Some(kind)) => Some(format!("Uploaded {} file: {}", kind.label(), self.file_name)),
            _ => None,
        }
    }
}

/// Parse one upload by extension. Never fails: errors land in `outcome`.
pub fn preview_upload(file: &UploadedFile) -> UploadPreview {
    let kind = FileKind::from_name(&file.name);
    let outcome = parse_upload(file, kind).map_err(|e| e.to_string());

    match &outcome {
        Ok(Preview::Table(t)) => {
            log::info!("Parsed CSV {} with shape {:?}", file.name, t.shape());
        }
        Ok(Preview::Workbook(sheets)) => {
            log::info!("Parsed workbook {} with {} sheet(s)", file.name, sheets.len());
        }
        Err(e) => log::error!("Failed to parse {}: {e}", file.name),
    }

    UploadPreview {
        file_name: file.name.clone(),
        kind,
        outcome,
    }
}

fn parse_upload(file: &UploadedFile, kind: Option<FileKind>) -> Result<Preview, UploadError> {
    match kind {
        Some(FileKind::Csv) => loader::load_csv(&file.bytes).map(Preview::Table),
        Some(FileKind::Excel) => loader::load_excel(&file.bytes).map(Preview::Workbook),
        None => Err(UploadError::UnsupportedExtension {
            name: file.name.clone(),
        }),
    }
}
