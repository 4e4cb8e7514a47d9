// src/gui/components/form_panel.rs
//
// Inputs only. Reads the current form and pushes one FormEvent per change;
// the caller applies them after drawing.

use eframe::egui::{self, RichText};
use crate::{
    config::consts::{KNOWN_DOMAINS, KNOWN_GATEWAYS},
    form::{FormEvent, FormState},
};

fn section(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).strong().color(egui::Color32::from_rgb(57, 255, 20)));
}

pub fn draw(ui: &mut egui::Ui, form: &FormState, events: &mut Vec<FormEvent>) {
    // --- Product ---
    section(ui, "Product Name:");
    let mut product = form.product_name.clone();
    if ui.text_edit_singleline(&mut product).changed() {
        events.push(FormEvent::SetProductName(product));
    }

    // --- Gateways ---
    section(ui, "Payment Gateways:");
    ui.horizontal_wrapped(|ui| {
        for name in KNOWN_GATEWAYS {
            let mut on = form.has_gateway(name);
            if ui.checkbox(&mut on, name).changed() {
                events.push(FormEvent::ToggleGateway { name: s!(name), on });
            }
        }
    });

    // Added custom gateways: not in the fixed list, but still removable.
    let custom: Vec<&String> = form
        .selected_gateways
        .iter()
        .filter(|g| !KNOWN_GATEWAYS.contains(&g.as_str()))
        .collect();
    if !custom.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for name in custom {
                let mut on = true;
                if ui.checkbox(&mut on, name.as_str()).on_hover_text("Uncheck to remove").changed() {
                    events.push(FormEvent::ToggleGateway { name: name.clone(), on });
                }
            }
        });
    }

    ui.horizontal(|ui| {
        let mut draft = form.custom_gateway_draft.clone();
        let resp = ui.add(egui::TextEdit::singleline(&mut draft).hint_text("Custom Gateway"));
        if resp.changed() {
            events.push(FormEvent::SetCustomGateway(draft));
        }
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_add = form.pending_custom_gateway().is_some();
        let clicked = ui.add_enabled(can_add, egui::Button::new("Add Gateway")).clicked();
        if clicked || (enter && can_add) {
            events.push(FormEvent::AddCustomGateway);
        }
    });

    // --- Domains ---
    section(ui, "Domain Restrictions:");
    ui.horizontal(|ui| {
        for suffix in KNOWN_DOMAINS {
            let mut on = form.has_domain(suffix);
            if ui.checkbox(&mut on, suffix).changed() {
                events.push(FormEvent::ToggleDomain { suffix: s!(suffix), on });
            }
        }
    });

    // --- Keywords ---
    section(ui, "Custom Keywords:");
    let mut keywords = form.free_keywords.clone();
    let resp = ui.add(
        egui::TextEdit::multiline(&mut keywords)
            .hint_text("e.g., frete grátis, parcelamento")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        events.push(FormEvent::SetKeywords(keywords));
    }
}
