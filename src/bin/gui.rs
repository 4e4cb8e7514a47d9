// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use dorkgen::{
    gui,
    log::{self, LogTarget},
};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/dorkgen.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    // No console under the windows subsystem: stderr would go nowhere.
    log::init(LogTarget::File(log::default_gui_log_file()));
    dorkgen::logf!("Init: log target {:?}", log::target());

    let mut viewport = ViewportBuilder::default()
        .with_title(gui::app::WINDOW_TITLE)
        .with_inner_size([720.0, 640.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        dorkgen::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
