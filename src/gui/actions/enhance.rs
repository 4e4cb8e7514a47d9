// src/gui/actions/enhance.rs
use eframe::egui;
use crate::{
    enhance::EnhanceTask,
    gui::{app::App, progress::GuiProgress},
};

pub fn enhance(app: &mut App, ui_ctx: &egui::Context) {
    if !app.state.has_dork() {
        app.status("Generate a dork first");
        return;
    }

    // Newest click wins; the previous round is cancelled, never applied.
    let generation = app.supersede();

    let prog = GuiProgress::new(app.status.clone(), ui_ctx.clone(), app.generation.clone(), generation);
    let ctx = ui_ctx.clone();

    // → Worker thread: optimize, then estimate ←
    let task = EnhanceTask::spawn(
        app.optimizer.clone(),
        app.estimator.clone(),
        app.state.dork.clone(),
        prog,
        move || ctx.request_repaint(),
    );

    logf!("Enhance: Started task #{} (generation {})", task.id(), generation);
    app.task = Some(task);
}
