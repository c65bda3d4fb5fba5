//! Small egui helpers shared by the popup screens.

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 150, 120);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(200, 140, 30);

pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(text).strong().size(14.0));
    ui.separator();
}

/// Labeled monospace value with a copy button.
pub fn labeled_field_with_copy(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{label}:")).strong());
        ui.label(egui::RichText::new(value).monospace());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy_to_clipboard(value);
        }
    });
}

pub fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!(error = %e, "clipboard write failed");
            }
        }
        Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
    }
}

pub fn notice(ui: &mut egui::Ui, error: Option<&str>, info: Option<&str>) {
    if let Some(error) = error {
        ui.colored_label(egui::Color32::RED, error);
    }
    if let Some(info) = info {
        ui.colored_label(ACCENT, info);
    }
}
