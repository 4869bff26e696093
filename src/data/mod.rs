/// Data layer: uploaded files, tabular parsing, and preview types.
///
/// Architecture:
/// ```text
///  picked / dropped file
///        │
///        ▼
///   ┌──────────────┐
///   │ UploadedFile │  name + bytes
///   └──────────────┘
///        │  FileKind from extension
///        ▼
///   ┌──────────┐
///   │  loader   │  .csv → Table, .xlsx → Vec<Sheet>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ UploadPreview │  Preview or error text
///   └───────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod upload;
