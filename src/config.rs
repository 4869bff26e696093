use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Where the bundled assets live and how the download is presented.
/// Every field has a default, so a partial `dashboard.json` is fine.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub assets_dir: PathBuf,
    pub logo_file: String,
    pub presentation_file: String,
    /// File name suggested in the save dialog.
    pub download_file_name: String,
    pub download_label: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            logo_file: "Logo.png".to_string(),
            presentation_file: "Barwon Of A Kind.pptx".to_string(),
            download_file_name: "Barwon_Of_A_Kind.pptx".to_string(),
            download_label: "📥 Download the Barwon of a Kind Presentation".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn logo_path(&self) -> PathBuf {
        self.assets_dir.join(&self.logo_file)
    }

    pub fn presentation_path(&self) -> PathBuf {
        self.assets_dir.join(&self.presentation_file)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load `dashboard.json` from `dir` if present, falling back to defaults.
    pub fn load_or_default(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE} found, using default asset paths");
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring invalid configuration: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_assets() {
        let config = DashboardConfig::default();
        assert_eq!(config.logo_path(), Path::new("assets/Logo.png"));
        assert_eq!(
            config.presentation_path(),
            Path::new("assets/Barwon Of A Kind.pptx")
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "assets_dir": "/srv/dashboard", "download_label": "Get slides" }"#,
        )
        .unwrap();

        let config = DashboardConfig::load_or_default(dir.path());
        assert_eq!(config.assets_dir, PathBuf::from("/srv/dashboard"));
        assert_eq!(config.download_label, "Get slides");
        assert_eq!(config.logo_file, "Logo.png");
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(
            DashboardConfig::load_or_default(dir.path()),
            DashboardConfig::default()
        );
    }
}
