// src/gui/actions/generate.rs
use crate::{config::state::Event, gui::app::App};

pub fn generate(app: &mut App) {
    // A running enhance would otherwise land on top of the fresh dork.
    app.supersede();

    app.dispatch(Event::Generate);
    logf!(
        "Generate: gateways={}, domains={}, dork chars={}",
        app.state.form.selected_gateways.len(),
        app.state.form.domain_suffixes.len(),
        app.state.dork.chars().count()
    );
    app.status("Generated");
}
