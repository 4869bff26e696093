use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::data::upload::{preview_upload, UploadPreview, UploadedFile};
use crate::download::DownloadOffer;

/// Where an upload comes from.
pub enum UploadSource {
    Path(PathBuf),
    File(UploadedFile),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Download control or error, decided from the asset on disk.
    pub download: DownloadOffer,

    /// One entry per file in the current upload selection.
    pub uploads: Vec<UploadPreview>,

    /// Status / error message shown under the download control.
    pub status_message: Option<String>,
}

/// Read (if needed) and parse one upload source.
fn preview_source(source: UploadSource) -> UploadPreview {
    let path = match source {
        UploadSource::File(file) => return preview_upload(&file),
        UploadSource::Path(path) => path,
    };
    match UploadedFile::read(&path) {
        Ok(file) => preview_upload(&file),
        Err(e) => {
            log::error!("Failed to read upload: {e:#}");
            UploadPreview {
                file_name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                kind: None,
                outcome: Err(format!("{e:#}")),
            }
        }
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let download = DownloadOffer::probe(&config);
        Self {
            config,
            download,
            uploads: Vec::new(),
            status_message: None,
        }
    }

    /// Re-check the presentation on disk.
    pub fn refresh_download(&mut self) {
        self.download = DownloadOffer::probe(&self.config);
    }

    /// Replace the current selection with picked paths and in-memory files
    /// (e.g. dropped onto the window), keeping their order. Paths that
    /// cannot be read still get a preview slot carrying the error.
    pub fn accept(&mut self, sources: Vec<UploadSource>) {
        log::info!("Received {} uploaded file(s)", sources.len());
        self.uploads = sources.into_iter().map(preview_source).collect();
    }

    pub fn clear_uploads(&mut self) {
        self.uploads.clear();
    }

    /// Whether the preview section is rendered at all.
    pub fn has_previews(&self) -> bool {
        !self.uploads.is_empty()
    }

    /// Run the save dialog for the presentation and record the outcome.
    pub fn download_presentation(&mut self) {
        self.status_message = match self.download.save_with_dialog() {
            Ok(Some(dest)) => Some(format!("Saved to {}", dest.display())),
            Ok(None) => None,
            Err(e) => {
                log::error!("Download failed: {e:#}");
                Some(format!("Error: {e:#}"))
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Preview;

    fn state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        AppState::new(DashboardConfig {
            assets_dir: dir.path().to_path_buf(),
            ..DashboardConfig::default()
        })
    }

    #[test]
    fn no_uploads_means_no_preview_section() {
        let mut state = state();
        assert!(!state.has_previews());
        state.accept(Vec::new());
        assert!(!state.has_previews());
    }

    #[test]
    fn new_selection_replaces_previous_one() {
        let mut state = state();
        state.accept(vec![
            UploadSource::File(UploadedFile::new("a.csv", b"x\n1\n".to_vec())),
            UploadSource::File(UploadedFile::new("b.csv", b"y\n2\n".to_vec())),
        ]);
        assert_eq!(state.uploads.len(), 2);

        state.accept(vec![UploadSource::File(UploadedFile::new(
            "c.csv",
            b"z\n3\n".to_vec(),
        ))]);
        assert_eq!(state.uploads.len(), 1);
        assert_eq!(state.uploads[0].file_name, "c.csv");

        state.clear_uploads();
        assert!(!state.has_previews());
    }

    #[test]
    fn bad_file_does_not_affect_others() {
        let mut state = state();
        state.accept(vec![
            UploadSource::File(UploadedFile::new("bad.csv", b"a\n1,2\n".to_vec())),
            UploadSource::File(UploadedFile::new("good.csv", b"a\n1\n".to_vec())),
        ]);
        assert!(state.uploads[0].outcome.is_err());
        assert!(matches!(state.uploads[1].outcome, Ok(Preview::Table(_))));
    }

    #[test]
    fn unreadable_path_keeps_its_place_in_the_selection() {
        let mut state = state();
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("rain.csv");
        std::fs::write(&good, "mm\n4\n").unwrap();

        state.accept(vec![
            UploadSource::Path(good),
            UploadSource::Path(dir.path().join("gone.csv")),
            UploadSource::File(UploadedFile::new("flow.csv", b"ml\n9\n".to_vec())),
        ]);
        let names: Vec<&str> = state.uploads.iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(names, vec!["rain.csv", "gone.csv", "flow.csv"]);
        assert!(state.uploads[0].outcome.is_ok());
        assert!(state.uploads[1].outcome.is_err());
        assert!(state.uploads[2].outcome.is_ok());
    }

    #[test]
    fn missing_asset_refreshes_to_available() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(DashboardConfig {
            assets_dir: dir.path().to_path_buf(),
            ..DashboardConfig::default()
        });
        assert!(matches!(state.download, DownloadOffer::Missing { .. }));

        std::fs::write(state.config.presentation_path(), b"pptx").unwrap();
        state.refresh_download();
        assert!(matches!(state.download, DownloadOffer::Available { .. }));
    }
}
