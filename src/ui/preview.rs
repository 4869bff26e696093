use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Preview, Table};
use crate::data::upload::UploadPreview;
use crate::ui::panels::{callout, Callout};

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Upload previews (central panel)
// ---------------------------------------------------------------------------

/// Render one uploaded file: status line, heading, then its table(s).
pub fn upload_preview(ui: &mut Ui, index: usize, upload: &UploadPreview) {
    match &upload.outcome {
        Ok(preview) => {
            if let Some(msg) = upload.success_message() {
                callout(ui, &msg, Callout::Success);
            }
            ui.label(
                RichText::new(format!("Data preview from {}:", upload.file_name)).strong(),
            );
            ui.push_id(("upload", index), |ui: &mut Ui| match preview {
                Preview::Table(table) => table_view(ui, table),
                Preview::Workbook(sheets) => {
                    for sheet in sheets {
                        let (rows, cols) = sheet.table.shape();
                        egui::CollapsingHeader::new(format!(
                            "{}  ({rows} × {cols})",
                            sheet.name
                        ))
                        .id_salt(&sheet.name)
                        .default_open(true)
                        .show(ui, |ui: &mut Ui| table_view(ui, &sheet.table));
                    }
                }
            });
        }
        Err(e) => {
            callout(ui, &format!("{}: {e}", upload.file_name), Callout::Error);
        }
    }
    ui.add_space(12.0);
}

/// A scrollable, virtualised grid with a leading row-index column.
pub fn table_view(ui: &mut Ui, table: &Table) {
    if table.is_empty() {
        ui.label(RichText::new("Empty DataFrame").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(MAX_TABLE_HEIGHT)
        .column(Column::auto())
        .columns(Column::auto().at_least(60.0).clip(true), table.columns.len())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            header.col(|_ui| {});
            for (name, dtype) in table.columns.iter().zip(&table.dtypes) {
                header.col(|ui: &mut Ui| {
                    ui.strong(name).on_hover_text(dtype.to_string());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                let i = row.index();
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new(i.to_string()).weak());
                });
                for cell in &table.rows[i] {
                    row.col(|ui: &mut Ui| {
                        if cell.is_null() {
                            ui.label(RichText::new(cell.to_string()).weak());
                        } else {
                            ui.label(cell.to_string());
                        }
                    });
                }
            });
        });
}
