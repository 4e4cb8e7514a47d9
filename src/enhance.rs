// src/enhance.rs
//
// Optimize → estimate, strictly in that order. The GUI runs this on a worker
// thread through `EnhanceTask`; the CLI calls `run` directly.
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};

use crate::{
    estimator::{AnalysisResult, Estimator},
    optimizer::Optimize,
    progress::{Progress, Stage},
};

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Shared cancel flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnhanceOutcome {
    /// Dork the round started from
    pub original: String,
    /// Optimizer output (equal to `original` when the optimizer failed open)
    pub dork: String,
    pub analysis: AnalysisResult,
}

/// Run one enhance round. `None` when cancelled; nothing partial is returned.
/// `progress.optimized` fires once the new dork is known, before the analysis wait.
pub fn run(
    optimizer: &dyn Optimize,
    estimator: &Estimator,
    dork: &str,
    cancel: &CancelToken,
    progress: &mut dyn Progress,
) -> Option<EnhanceOutcome> {
    progress.stage(Stage::Optimizing);
    let optimized = optimizer.optimize(dork);

    if cancel.is_cancelled() {
        logd!("Enhance: Cancelled after optimize");
        progress.log("Cancelled");
        progress.finish();
        return None;
    }
    progress.optimized(&optimized);

    progress.stage(Stage::Analyzing);
    let analysis = estimator.estimate(&optimized, cancel);
    progress.finish();

    let analysis = analysis?;
    if cancel.is_cancelled() {
        return None;
    }

    Some(EnhanceOutcome { original: s!(dork), dork: optimized, analysis })
}

enum TaskMsg {
    Optimized(String),
    Finished(EnhanceOutcome),
}

/// Forwards to the caller's sink and pushes the optimized dork down the channel.
struct ChannelProgress<P> {
    inner: P,
    tx: Sender<TaskMsg>,
    token: CancelToken,
}

impl<P: Progress> Progress for ChannelProgress<P> {
    fn stage(&mut self, stage: Stage) {
        self.inner.stage(stage);
    }
    fn optimized(&mut self, dork: &str) {
        self.inner.optimized(dork);
        if !self.token.is_cancelled() {
            let _ = self.tx.send(TaskMsg::Optimized(s!(dork)));
        }
    }
    fn log(&mut self, msg: &str) {
        self.inner.log(msg);
    }
    fn finish(&mut self) {
        self.inner.finish();
    }
}

#[derive(Debug)]
pub enum TaskPoll {
    Pending,
    /// Optimizer output; the analysis is still running
    Optimized(String),
    Done(EnhanceOutcome),
    /// Worker ended without a result (cancelled)
    Dropped,
}

/// Handle to an enhance round running on its own thread.
/// Dropping the handle does not stop the thread; call `cancel` for that.
pub struct EnhanceTask {
    id: u64,
    cancel: CancelToken,
    rx: Receiver<TaskMsg>,
}

impl EnhanceTask {
    /// `wake` runs on the worker after each message and once it is done.
    pub fn spawn<P, W>(
        optimizer: Arc<dyn Optimize>,
        estimator: Estimator,
        dork: String,
        progress: P,
        wake: W,
    ) -> Self
    where
        P: Progress + Send + 'static,
        W: Fn() + Send + 'static,
    {
        let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
        let cancel = CancelToken::new();
        let (tx, rx) = mpsc::channel::<TaskMsg>();

        let token = cancel.clone();
        thread::spawn(move || {
            logf!("Enhance: Begin task #{}", id);
            let mut prog = ChannelProgress { inner: progress, tx: tx.clone(), token: token.clone() };

            // The optimized dork is sent from inside `run`; wake the UI for it too.
            let result = run(optimizer.as_ref(), &estimator, &dork, &token, &mut prog);
            wake();

            match result {
                Some(outcome) if !token.is_cancelled() => {
                    // Receiver may already be gone if the task was superseded.
                    if tx.send(TaskMsg::Finished(outcome)).is_err() {
                        logd!("Enhance: Task #{} finished after its handle was dropped", id);
                    } else {
                        logf!("Enhance: Task #{} done", id);
                    }
                }
                _ => logf!("Enhance: Task #{} cancelled", id),
            }
            wake();
        });

        Self { id, cancel, rx }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Non-blocking. A cancelled task never reports `Optimized` or `Done`.
    pub fn poll(&self) -> TaskPoll {
        if self.cancel.is_cancelled() {
            return TaskPoll::Dropped;
        }
        match self.rx.try_recv() {
            Ok(TaskMsg::Optimized(dork)) => TaskPoll::Optimized(dork),
            Ok(TaskMsg::Finished(outcome)) => TaskPoll::Done(outcome),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Dropped,
        }
    }

    /// Block until the worker reports its final result. For the CLI and tests.
    pub fn wait(self) -> Option<EnhanceOutcome> {
        loop {
            match self.rx.recv().ok()? {
                TaskMsg::Optimized(_) => continue,
                TaskMsg::Finished(outcome) => {
                    return (!self.cancel.is_cancelled()).then_some(outcome);
                }
            }
        }
    }
}
