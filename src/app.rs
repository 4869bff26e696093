use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::upload::UploadedFile;
use crate::state::{AppState, UploadSource};
use crate::ui::{intro, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The presentation may have been added or removed while unfocused.
        let refocused = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::WindowFocused(true)))
        });
        if refocused {
            self.state.refresh_download();
        }

        // Files dropped onto the window replace the current selection.
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.state.accept(dropped.into_iter().filter_map(dropped_source).collect());
        }

        // ---- Left side panel: navigation hint + download ----
        egui::SidePanel::left("sidebar")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: intro page + uploads ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    intro::header(ui, &self.state.config);
                    ui.add_space(8.0);
                    intro::introduction(ui);
                    ui.add_space(16.0);
                    ui.separator();
                    panels::upload_section(ui, &mut self.state);
                });
        });
    }
}

/// Web builds hand over bytes, native builds a path.
fn dropped_source(file: egui::DroppedFile) -> Option<UploadSource> {
    if let Some(bytes) = file.bytes {
        return Some(UploadSource::File(UploadedFile::new(file.name, bytes.to_vec())));
    }
    file.path.map(UploadSource::Path)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn dropped_bytes_win_over_path() {
        let file = egui::DroppedFile {
            name: "rain.csv".to_string(),
            path: Some(PathBuf::from("/nowhere/rain.csv")),
            bytes: Some(Arc::from(&b"mm\n20\n"[..])),
            ..Default::default()
        };
        let Some(UploadSource::File(upload)) = dropped_source(file) else {
            panic!("expected in-memory upload");
        };
        assert_eq!(upload.name, "rain.csv");
        assert_eq!(upload.bytes, b"mm\n20\n");
    }

    #[test]
    fn dropped_path_is_used_without_bytes() {
        let file = egui::DroppedFile {
            name: "lab.xlsx".to_string(),
            path: Some(PathBuf::from("/data/lab.xlsx")),
            ..Default::default()
        };
        let Some(UploadSource::Path(path)) = dropped_source(file) else {
            panic!("expected a path upload");
        };
        assert_eq!(path, PathBuf::from("/data/lab.xlsx"));
    }

    #[test]
    fn dropped_file_without_content_is_skipped() {
        let file = egui::DroppedFile {
            name: "ghost.csv".to_string(),
            ..Default::default()
        };
        assert!(dropped_source(file).is_none());
    }
}
