// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if !app.state.has_dork() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no dork yet");
        return;
    }

    logf!("Copy: dork chars={}", app.state.dork.chars().count());
    ui_ctx.copy_text(app.state.dork.clone());
    app.show_copied = true;
}
