use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::upload::FileKind;
use crate::download::DownloadOffer;
use crate::state::{AppState, UploadSource};
use crate::ui::preview;

// ---------------------------------------------------------------------------
// Coloured message boxes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum Callout {
    Success,
    Error,
}

/// A filled box with a message, green for success and red for errors.
pub fn callout(ui: &mut Ui, text: &str, kind: Callout) {
    let (fill, fg) = match kind {
        Callout::Success => (Color32::from_rgb(223, 240, 216), Color32::from_rgb(23, 92, 44)),
        Callout::Error => (Color32::from_rgb(253, 226, 226), Color32::from_rgb(125, 20, 20)),
    };
    egui::Frame::default()
        .fill(fill)
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(fg));
        });
}

// ---------------------------------------------------------------------------
// Left side panel – navigation hint and download
// ---------------------------------------------------------------------------

/// Render the sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    callout(ui, "Navigate through the pages using the sidebar.", Callout::Success);
    ui.add_space(8.0);

    let mut download_clicked = false;
    match &state.download {
        DownloadOffer::Available { label, .. } => {
            download_clicked = ui.button(label.as_str()).clicked();
        }
        DownloadOffer::Missing { message } => {
            callout(ui, message, Callout::Error);
        }
    }
    if download_clicked {
        state.download_presentation();
    }

    if let Some(msg) = &state.status_message {
        ui.add_space(4.0);
        let color = if msg.starts_with("Error") {
            Color32::RED
        } else {
            ui.visuals().weak_text_color()
        };
        ui.label(RichText::new(msg).color(color).small());
    }
}

// ---------------------------------------------------------------------------
// Upload section
// ---------------------------------------------------------------------------

/// Upload widget plus one preview per uploaded file.
pub fn upload_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📁 Upload and Update Data");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Upload new data files to update the dashboard. You can upload ");
        ui.label(RichText::new("CSV").strong());
        ui.label(" or ");
        ui.label(RichText::new("Excel").strong());
        ui.label(" files containing EcoDetection, Rainfall, Streamflow, or Lab data.");
    });
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Choose CSV or Excel files").clicked() {
            open_upload_dialog(state);
        }
        if state.has_previews() && ui.button("Clear").clicked() {
            state.clear_uploads();
        }
        ui.label(RichText::new("or drop files onto the window").weak());
    });
    ui.add_space(8.0);

    if !state.has_previews() {
        return;
    }
    for (i, upload) in state.uploads.iter().enumerate() {
        preview::upload_preview(ui, i, upload);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_upload_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Choose CSV or Excel files")
        .add_filter("CSV or Excel", &FileKind::EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx"])
        .pick_files();

    if let Some(paths) = files {
        state.accept(paths.into_iter().map(UploadSource::Path).collect());
    }
}
