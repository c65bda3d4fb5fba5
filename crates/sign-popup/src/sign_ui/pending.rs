use eframe::egui;
use sign_popup_adapters::BackgroundAdapter;
use sign_popup_core::{RequestOrigin, SignRoute};

use crate::ui;

/// Lists pending requests. Returns the in-app route the user chose to open.
pub fn render_pending(
    ctx: &egui::Context,
    background: &BackgroundAdapter,
    notice: Option<&str>,
) -> Option<SignRoute> {
    let mut selected = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui::styled_heading(ui, "Pending Requests");
        if let Some(notice) = notice {
            ui.colored_label(ui::WARNING, notice);
        }
        ui.add_space(8.0);

        match background.pending() {
            Ok(requests) if requests.is_empty() => {
                ui.label("No pending sign requests.");
            }
            Ok(requests) => {
                for request in requests {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.monospace(format!("#{}", request.index));
                            ui.label(request.chain_id.as_str());
                            let origin = match &request.origin {
                                RequestOrigin::InApp => "wallet".to_owned(),
                                RequestOrigin::Provider { url } => url.clone(),
                            };
                            ui.label(egui::RichText::new(origin).weak());
                            if ui.button("Open").clicked() {
                                selected = Some(SignRoute::new(request.index.clone(), false));
                            }
                        });
                    });
                }
            }
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "build {} ({})",
                    env!("GIT_HASH"),
                    env!("BUILD_TIME")
                ))
                .small()
                .weak(),
            );
        });
    });

    selected
}
