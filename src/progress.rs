// src/progress.rs
/// Progress reporting for the enhance pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a stage starts.
    fn stage(&mut self, _stage: Stage) {}

    /// The optimizer is done; analysis has not started yet.
    fn optimized(&mut self, _dork: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful, cancelled or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Optimizing,
    Analyzing,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Optimizing => "Optimizing…",
            Stage::Analyzing => "Analyzing…",
        }
    }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every call; handy for checking stage order.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub stages: Vec<Stage>,
    pub optimized: Vec<String>,
    pub messages: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn stage(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
    fn optimized(&mut self, dork: &str) {
        self.optimized.push(s!(dork));
    }
    fn log(&mut self, msg: &str) {
        self.messages.push(s!(msg));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
