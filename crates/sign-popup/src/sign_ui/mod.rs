//! Sign page screens.

mod data_tab;
mod details_tab;
mod pending;

use eframe::egui;
use sign_popup_core::{RequestOrigin, Tab, TabBody};

use crate::app::PopupPage;
use crate::ui;

pub use pending::render_pending;

pub fn render_sign_page(ctx: &egui::Context, page: &mut PopupPage) {
    let view = page.view();

    egui::TopBottomPanel::top("sign_header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if view.show_back_button && ui.button("⬅").on_hover_text("Back").clicked() {
                page.go_back();
            }
            ui::styled_heading(ui, "Sign Request");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(view.chain_name.as_deref().unwrap_or("Unknown chain"));
            });
        });
        if let Some(RequestOrigin::Provider { url }) = &view.origin {
            ui.label(egui::RichText::new(format!("Requested by {url}")).weak());
        }
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .selectable_label(view.tab == Tab::Details, "Details")
                .clicked()
            {
                page.select_tab(Tab::Details);
            }
            if ui.selectable_label(view.tab == Tab::Data, "Data").clicked() {
                page.select_tab(Tab::Data);
            }
        });
        ui.add_space(2.0);
    });

    egui::TopBottomPanel::bottom("sign_buttons").show(ctx, |ui| {
        ui.add_space(8.0);
        ui::notice(ui, view.error.as_deref(), view.info.as_deref());
        ui.horizontal(|ui| {
            let size = egui::vec2(150.0, 32.0);
            let approve = ui.add_enabled(
                view.approve_enabled,
                egui::Button::new(
                    egui::RichText::new("Approve")
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(ui::ACCENT)
                .min_size(size),
            );
            let reject = ui.add_enabled(
                view.reject_enabled,
                egui::Button::new(egui::RichText::new("Reject").color(egui::Color32::RED))
                    .min_size(size),
            );
            if view.buttons_loading {
                ui.spinner();
            }

            if approve.clicked() {
                if let Err(e) = page.approve() {
                    tracing::debug!(error = %e, "approve click did not resolve");
                }
            }
            if reject.clicked() {
                if let Err(e) = page.reject() {
                    tracing::debug!(error = %e, "reject click did not resolve");
                }
            }
        });
        ui.add_space(8.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| match &view.body {
            TabBody::Details(details) => details_tab::render_details_tab(ui, details),
            TabBody::Data(raw) => data_tab::render_data_tab(ui, raw),
        });
    });
}
