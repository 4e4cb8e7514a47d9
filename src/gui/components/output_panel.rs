// src/gui/components/output_panel.rs

use eframe::egui::{self, RichText, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if ui.button(RichText::new("Generate Dork").strong()).clicked() {
        actions::generate(app);
    }

    ui.add_space(8.0);
    ui.heading("Generated Dork:");
    ui.add(egui::Label::new(RichText::new(&app.state.dork).monospace()).wrap());

    let has_dork = app.state.has_dork();

    // Actions: Test / Copy / Enhance
    ui.horizontal(|ui| {
        if ui.add_enabled(has_dork, egui::Button::new("Test in New Tab")).clicked() {
            actions::open_search(app, ui.ctx());
        }

        if ui.add_enabled(has_dork, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui
            .add_enabled(has_dork, egui::Button::new("Enhance with Gemini"))
            .on_hover_text("Reword via Gemini, then run the simulated analysis")
            .clicked()
        {
            actions::enhance(app, ui.ctx());
        }

        if app.running() {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });

    ui.add_space(8.0);
    ui.label(format!("Estimated Results: {}", app.state.analysis.estimated_results_label));

    if !app.state.analysis.suggestions.is_empty() {
        ui.label(RichText::new("Improvement Suggestions:").strong());
        for suggestion in &app.state.analysis.suggestions {
            ui.label(format!("• {suggestion}"));
        }
    }
}
