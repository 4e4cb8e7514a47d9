// src/gui/actions/open.rs
use eframe::egui;
use crate::{core::search_url, gui::app::App};

/// "Test in New Tab": hand the search URL to the system browser.
pub fn open_search(app: &mut App, ui_ctx: &egui::Context) {
    if !app.state.has_dork() {
        app.status("Nothing to search");
        return;
    }

    let url = search_url(&app.state.dork);
    logf!("Open: {}", url);
    ui_ctx.open_url(egui::OpenUrl::new_tab(url));
}
