// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        options::AppOptions,
        state::{AppState, Event},
    },
    enhance::{EnhanceTask, TaskPoll},
    estimator::Estimator,
    optimizer::{GeminiOptimizer, Optimize},
};

use super::components::{alert, form_panel, output_panel};

pub const WINDOW_TITLE: &str = "JCM Group Dork Generator";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = AppOptions::from_env().unwrap_or_else(|e| {
        loge!("Config: {}; using defaults", e);
        AppOptions::default()
    });

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(app_options)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub optimizer: Arc<dyn Optimize>,
    pub estimator: Estimator,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,

    // in-flight enhance round, if any
    pub task: Option<EnhanceTask>,
    // bumped on every Enhance/Generate so stale workers stop writing status
    pub generation: Arc<AtomicU64>,

    pub show_copied: bool,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        if options.optimizer.api_key.is_none() {
            logw!("Init: No API key set; Enhance will keep dorks unchanged");
        }
        logf!("Init: optimizer={:?}", options.optimizer);

        let optimizer: Arc<dyn Optimize> = Arc::new(GeminiOptimizer::new(options.optimizer));
        Self::with_parts(optimizer, Estimator::new(&options.estimator))
    }

    /// Wire up with any optimizer/estimator (tests, demos).
    pub fn with_parts(optimizer: Arc<dyn Optimize>, estimator: Estimator) -> Self {
        Self {
            state: AppState::default(),
            optimizer,
            estimator,
            status: Arc::new(Mutex::new(s!("Idle"))),
            task: None,
            generation: Arc::new(AtomicU64::new(0)),
            show_copied: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool {
        self.task.is_some()
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn dispatch(&mut self, event: Event) {
        logd!("UI: {:?}", event);
        self.state = self.state.reduce(event);
    }

    /// Cancel any in-flight enhance and return the new generation number.
    pub fn supersede(&mut self) -> u64 {
        if let Some(prev) = self.task.take() {
            prev.cancel();
            logf!("Enhance: Superseded task #{}", prev.id());
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Drain whatever the enhance worker has sent since the last frame.
    pub fn poll_task(&mut self) {
        while let Some(task) = &self.task {
            match task.poll() {
                TaskPoll::Pending => break,
                TaskPoll::Optimized(dork) => {
                    self.dispatch(Event::Optimized(dork));
                }
                TaskPoll::Done(outcome) => {
                    self.task = None;
                    self.dispatch(Event::Enhanced(outcome));
                    self.status("Ready");
                }
                TaskPoll::Dropped => {
                    self.task = None;
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_task();
        if self.running() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("JCM GROUP DORK GENERATOR");
                ui.separator();

                let mut events = Vec::new();
                form_panel::draw(ui, &self.state.form, &mut events);
                for ev in events {
                    self.dispatch(Event::Form(ev));
                }

                ui.separator();

                output_panel::draw(ui, self);
            });
        });

        alert::draw(ctx, self);
    }
}
