use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::DashboardConfig;

pub const PRESENTATION_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

pub const MISSING_MESSAGE: &str = "Presentation file not found.";

// ---------------------------------------------------------------------------
// Download offer for the bundled presentation
// ---------------------------------------------------------------------------

/// Either the presentation can be downloaded or the sidebar shows an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOffer {
    Available {
        source: PathBuf,
        file_name: String,
        label: String,
    },
    Missing {
        message: String,
    },
}

impl DownloadOffer {
    /// Check the configured asset path.
    pub fn probe(config: &DashboardConfig) -> Self {
        let source = config.presentation_path();
        if source.is_file() {
            log::info!(
                "Offering {} for download ({PRESENTATION_MIME})",
                source.display()
            );
            DownloadOffer::Available {
                source,
                file_name: config.download_file_name.clone(),
                label: config.download_label.clone(),
            }
        } else {
            log::warn!("Presentation not found at {}", source.display());
            DownloadOffer::Missing {
                message: MISSING_MESSAGE.to_string(),
            }
        }
    }

    /// Copy the asset byte-for-byte to `dest`. Returns the number of bytes written.
    pub fn save_to(&self, dest: &Path) -> Result<u64> {
        let DownloadOffer::Available { source, .. } = self else {
            anyhow::bail!(MISSING_MESSAGE);
        };
        let written = std::fs::copy(source, dest).with_context(|| {
            format!("copying {} to {}", source.display(), dest.display())
        })?;
        log::info!("Saved presentation to {} ({written} bytes)", dest.display());
        Ok(written)
    }

    /// Ask for a destination with a native save dialog, then copy.
    /// `Ok(None)` means the user cancelled.
    pub fn save_with_dialog(&self) -> Result<Option<PathBuf>> {
        let DownloadOffer::Available { file_name, .. } = self else {
            anyhow::bail!(MISSING_MESSAGE);
        };
        let Some(dest) = rfd::FileDialog::new()
            .set_title("Save presentation")
            .set_file_name(file_name)
            .add_filter("PowerPoint presentation", &["pptx"])
            .save_file()
        else {
            return Ok(None);
        };
        self.save_to(&dest)?;
        Ok(Some(dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> DashboardConfig {
        DashboardConfig {
            assets_dir: dir.to_path_buf(),
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn missing_asset_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let offer = DownloadOffer::probe(&config_in(dir.path()));
        assert!(matches!(offer, DownloadOffer::Missing { .. }));
        assert_eq!(
            offer,
            DownloadOffer::Missing {
                message: MISSING_MESSAGE.to_string()
            }
        );
        assert!(offer.save_to(&dir.path().join("out.pptx")).is_err());
    }

    #[test]
    fn present_asset_is_offered_and_copied_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        std::fs::write(config.presentation_path(), &payload).unwrap();

        let offer = DownloadOffer::probe(&config);
        let DownloadOffer::Available { file_name, .. } = &offer else {
            panic!("expected an available offer, got {offer:?}");
        };
        assert_eq!(file_name, "Barwon_Of_A_Kind.pptx");

        let dest = dir.path().join("copy.pptx");
        assert_eq!(offer.save_to(&dest).unwrap(), 4096);
        assert_eq!(std::fs::read(dest).unwrap(), payload);
    }

    #[test]
    fn directory_at_asset_path_is_not_offered() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir(config.presentation_path()).unwrap();
        assert!(matches!(
            DownloadOffer::probe(&config),
            DownloadOffer::Missing { .. }
        ));
    }
}
