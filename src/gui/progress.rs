// src/gui/progress.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use eframe::egui;

use crate::progress::{Progress, Stage};

/// Writes enhance progress into the shared status line.
/// Goes quiet once a newer round (or a Generate) has bumped `generation`.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    generation: Arc<AtomicU64>,
    mine: u64,
}

impl GuiProgress {
    pub fn new(
        status: Arc<Mutex<String>>,
        ctx: egui::Context,
        generation: Arc<AtomicU64>,
        mine: u64,
    ) -> Self {
        Self { status, ctx, generation, mine }
    }

    fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.mine
    }

    fn set_status(&self, msg: impl Into<String>) {
        if !self.is_current() {
            return;
        }
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn stage(&mut self, stage: Stage) {
        self.set_status(stage.label());
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn finish(&mut self) {
        self.set_status("Ready");
    }
}
