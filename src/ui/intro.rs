use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{self, Align, FontId, RichText, Ui};

use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// Static introduction content
// ---------------------------------------------------------------------------

/// `(bold lead, rest of line)` bullets of the dashboard overview.
const OVERVIEW: &[(&str, &str)] = &[
    (
        "Data Collection Map",
        ": See the exact locations of the data collection points within the catchment area.",
    ),
    (
        "Water Quality Comparison",
        ": Compare data from the Eco Dev sensors and lab tests for parameters such as turbidity, nitrate, and phosphorus.",
    ),
    (
        "Rainfall & Streamflow",
        ": Analyze how rainfall and streamflow impact water quality.",
    ),
    (
        "Alerts",
        ": Get notified when thresholds (e.g., 20mm of rainfall or high streamflow) are exceeded, triggering the need for further testing.",
    ),
    (
        "Conclusions & Recommendations",
        ": Summarize key findings and provide recommendations for ongoing sensor deployment and data management.",
    ),
];

const ASSISTANCE: &[(&str, &str, &str)] = &[
    (
        "Meet ",
        "John",
        ", our AI assistant! John has access to all the water quality, rainfall, and streamflow data available on this dashboard.",
    ),
    (
        "",
        "",
        "You can ask John questions in a natural language format, and he'll provide insights, data summaries, and help you navigate through the dashboard.",
    ),
    (
        "",
        "",
        "To interact with John, click on the chat icon in the bottom right corner of any page.",
    ),
];

/// Logo plus the "H₂Overview Dashboard" title.
pub fn header(ui: &mut Ui, config: &DashboardConfig) {
    let logo_uri = format!("file://{}", config.logo_path().display());
    ui.add(egui::Image::new(logo_uri).max_width(200.0));
    ui.add_space(8.0);
    ui.label(title_job(ui.visuals().strong_text_color()));
}

fn title_job(color: egui::Color32) -> LayoutJob {
    let size = 26.0;
    let normal = TextFormat {
        font_id: FontId::proportional(size),
        color,
        ..Default::default()
    };
    let subscript = TextFormat {
        font_id: FontId::proportional(size * 0.6),
        color,
        valign: Align::BOTTOM,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    job.append("H", 0.0, normal.clone());
    job.append("2", 0.0, subscript);
    job.append("Overview Dashboard", 0.0, normal);
    job
}

/// Welcome text and dashboard overview.
pub fn introduction(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Welcome to ");
        ui.label(RichText::new("Barwon of a Kind").strong());
        ui.label(
            "'s IWN Hackathon Dashboard, designed to provide comprehensive insights into the \
             water quality data collected from the Little Coliban River catchment area.",
        );
    });
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("This dashboard is built for ");
        ui.label(RichText::new("Coliban Water management").strong());
        ui.label(
            " and focuses on comparing real-time sensor data with lab-based water quality \
             measurements, rainfall, and streamflow data.",
        );
    });

    ui.add_space(12.0);
    ui.heading("Dashboard Overview:");
    for (lead, rest) in OVERVIEW {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("•  ");
            ui.label(RichText::new(*lead).strong());
            ui.label(*rest);
        });
    }

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(RichText::new("👈 Select a page from the sidebar").strong());
        ui.label(" to start exploring the data, or ");
        ui.label(RichText::new("download our presentation").strong());
        ui.label(" to get a full overview of the project.");
    });

    ui.add_space(12.0);
    ui.heading("Need assistance?");
    for (before, bold, after) in ASSISTANCE {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label(format!("•  {before}"));
            if !bold.is_empty() {
                ui.label(RichText::new(*bold).strong());
            }
            ui.label(*after);
        });
    }

    ui.add_space(12.0);
    ui.heading("Want to dive deeper?");
    ui.label("•  Explore the interactive data visualizations and insights on each site-specific page.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_name_is_bold_in_first_bullet() {
        let (before, bold, after) = ASSISTANCE[0];
        assert_eq!(bold, "John");
        assert_eq!(
            format!("{before}{bold}{after}"),
            "Meet John, our AI assistant! John has access to all the water quality, rainfall, \
             and streamflow data available on this dashboard."
        );
    }

    #[test]
    fn title_has_subscript_two() {
        let job = title_job(egui::Color32::WHITE);
        assert_eq!(job.text, "H2Overview Dashboard");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[1].format.valign, Align::BOTTOM);
        assert!(job.sections[1].format.font_id.size < job.sections[0].format.font_id.size);
    }
}
