use eframe::egui;
use sign_popup_core::{DetailsBody, SignDocDetails};

use crate::ui;

pub fn render_details_tab(ui: &mut egui::Ui, body: &DetailsBody) {
    match body {
        DetailsBody::Loading => {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Waiting for the request...").weak());
            });
        }
        DetailsBody::Empty => {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(ui::WARNING, "This request has no message to sign");
            });
        }
        DetailsBody::Text { text, byte_len } => {
            ui::section_header(ui, "Message");
            ui.label(egui::RichText::new(text).monospace());
            ui.label(egui::RichText::new(format!("{byte_len} bytes")).small().weak());
        }
        DetailsBody::SignDoc(details) => render_sign_doc(ui, details),
        DetailsBody::Unrecognized { reason, compact } => {
            ui.colored_label(ui::WARNING, format!("Could not format request: {reason}"));
            ui.add_space(4.0);
            ui.label(egui::RichText::new(compact).monospace());
        }
    }
}

fn render_sign_doc(ui: &mut egui::Ui, details: &SignDocDetails) {
    ui::section_header(ui, &format!("Messages ({})", details.msgs.len()));
    for msg in &details.msgs {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&msg.msg_type).small().weak());
            ui.label(&msg.summary);
        });
    }

    ui::section_header(ui, "Fee");
    egui::Grid::new("sign_doc_fee")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            let memo = if details.memo.is_empty() {
                "(none)"
            } else {
                details.memo.as_str()
            };
            for (label, value) in [
                ("Fee", details.fee.as_str()),
                ("Gas", details.gas.as_str()),
                ("Memo", memo),
                ("Chain", details.chain_id.as_str()),
                ("Account", details.account_number.as_str()),
                ("Sequence", details.sequence.as_str()),
            ] {
                ui.label(egui::RichText::new(label).strong());
                ui.label(value);
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui::labeled_field_with_copy(ui, "SHA-256", &details.digest);
}
