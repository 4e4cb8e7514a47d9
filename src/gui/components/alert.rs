// src/gui/components/alert.rs
use eframe::egui;
use crate::{config::consts::COPIED_ALERT, gui::app::App};

/// Small modal-ish confirmation after Copy.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.show_copied {
        return;
    }

    egui::Window::new("Copied")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(COPIED_ALERT);
            if ui.button("OK").clicked() {
                app.show_copied = false;
            }
        });
}
