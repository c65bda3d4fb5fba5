use eframe::egui;

use crate::ui;

pub fn render_data_tab(ui: &mut egui::Ui, raw: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Raw data").strong());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            ui::copy_to_clipboard(raw);
        }
    });
    ui.add_space(4.0);

    // Read-only: a `&str` buffer cannot be edited.
    let mut text = raw;
    ui.add(
        egui::TextEdit::multiline(&mut text)
            .code_editor()
            .desired_width(f32::INFINITY),
    );
}
