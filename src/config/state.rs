// src/config/state.rs
//
// Everything the window shows, as one value. `reduce` is the only way it changes.
use crate::{
    config::consts::LABEL_AWAITING,
    core::dork,
    enhance::EnhanceOutcome,
    estimator::AnalysisResult,
    form::{FormEvent, FormState},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Form(FormEvent),
    Generate,
    /// Optimizer output arrived; the analysis is still pending
    Optimized(String),
    Enhanced(EnhanceOutcome),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub form: FormState,
    /// Last generated (or enhanced) dork; empty until the first Generate
    pub dork: String,
    pub analysis: AnalysisResult,
}

impl AppState {
    pub fn has_dork(&self) -> bool {
        !self.dork.is_empty()
    }

    pub fn reduce(&self, event: Event) -> AppState {
        match event {
            Event::Form(ev) => AppState { form: self.form.apply(ev), ..self.clone() },
            Event::Generate => AppState {
                form: self.form.clone(),
                dork: dork::assemble(&self.form),
                analysis: AnalysisResult::placeholder(LABEL_AWAITING),
            },
            Event::Optimized(dork) => AppState { dork, ..self.clone() },
            Event::Enhanced(outcome) => AppState {
                form: self.form.clone(),
                dork: outcome.dork,
                analysis: outcome.analysis,
            },
        }
    }
}
