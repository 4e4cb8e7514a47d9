// tests/enhance_task.rs
//
// Optimize → estimate ordering, fail-open pass-through, and cancellation of
// superseded rounds.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dorkgen::config::state::{AppState, Event};
use dorkgen::enhance::{self, CancelToken, EnhanceTask, TaskPoll};
use dorkgen::estimator::{Estimator, SUGGEST_BROADEN, SUGGEST_NARROW};
use dorkgen::optimizer::Optimize;
use dorkgen::progress::{NullProgress, RecordingProgress, Stage};

/// Uppercases the dork, optionally after a pause.
struct Shouty {
    delay: Duration,
    seen: Mutex<Vec<String>>,
}

impl Shouty {
    fn new(delay: Duration) -> Self {
        Self { delay, seen: Mutex::new(Vec::new()) }
    }
}

impl Optimize for Shouty {
    fn optimize(&self, dork: &str) -> String {
        self.seen.lock().unwrap().push(dork.to_string());
        std::thread::sleep(self.delay);
        dork.to_uppercase()
    }
}

/// Stands in for a failing Gemini call: hands the dork straight back.
struct Unchanged;

impl Optimize for Unchanged {
    fn optimize(&self, dork: &str) -> String {
        dork.to_string()
    }
}

#[test]
fn run_optimizes_then_estimates() {
    let opt = Shouty::new(Duration::ZERO);
    let est = Estimator::fixed(600_000, Duration::ZERO);
    let mut prog = RecordingProgress::default();

    let out = enhance::run(&opt, &est, "site:.br", &CancelToken::new(), &mut prog).unwrap();

    assert_eq!(out.original, "site:.br");
    assert_eq!(out.dork, "SITE:.BR");
    assert_eq!(out.analysis.suggestions, [SUGGEST_NARROW]);
    assert_eq!(prog.stages, [Stage::Optimizing, Stage::Analyzing]);
    assert_eq!(prog.optimized, ["SITE:.BR"]);
    assert!(prog.finished);
}

#[test]
fn failed_optimizer_still_gets_an_estimate() {
    let est = Estimator::fixed(5_000, Duration::ZERO);
    let out = enhance::run(&Unchanged, &est, "d", &CancelToken::new(), &mut NullProgress).unwrap();
    assert_eq!(out.dork, "d");
    assert_eq!(out.analysis.suggestions, [SUGGEST_BROADEN]);
}

#[test]
fn cancelled_round_returns_nothing() {
    let token = CancelToken::new();
    token.cancel();
    let est = Estimator::fixed(1, Duration::ZERO);
    let mut prog = RecordingProgress::default();

    assert!(enhance::run(&Unchanged, &est, "d", &token, &mut prog).is_none());
    // Never reached the analysis stage
    assert_eq!(prog.stages, [Stage::Optimizing]);
    assert!(prog.optimized.is_empty());
}

#[test]
fn optimized_dork_shows_before_the_analysis() {
    let task = EnhanceTask::spawn(
        Arc::new(Shouty::new(Duration::ZERO)),
        Estimator::fixed(600_000, Duration::from_millis(400)),
        "site:.br".to_string(),
        NullProgress,
        || {},
    );

    let mut state = AppState::default().reduce(Event::Generate);
    let awaiting = state.analysis.clone();
    let mut seen = Vec::new();
    for _ in 0..300 {
        match task.poll() {
            TaskPoll::Optimized(dork) => {
                seen.push("optimized");
                state = state.reduce(Event::Optimized(dork));
                // Dork already swapped, analysis still the placeholder
                assert_eq!(state.dork, "SITE:.BR");
                assert_eq!(state.analysis, awaiting);
            }
            TaskPoll::Done(out) => {
                seen.push("done");
                state = state.reduce(Event::Enhanced(out));
                break;
            }
            TaskPoll::Pending => std::thread::sleep(Duration::from_millis(10)),
            TaskPoll::Dropped => panic!("task dropped"),
        }
    }

    assert_eq!(seen, ["optimized", "done"]);
    assert_eq!(state.dork, "SITE:.BR");
    assert_eq!(state.analysis.suggestions, [SUGGEST_NARROW]);
}

#[test]
fn spawned_task_delivers_and_wakes() {
    let woke = Arc::new(Mutex::new(false));
    let w = woke.clone();

    let task = EnhanceTask::spawn(
        Arc::new(Shouty::new(Duration::ZERO)),
        Estimator::fixed(250_000, Duration::ZERO),
        "abc".to_string(),
        NullProgress,
        move || *w.lock().unwrap() = true,
    );

    let out = task.wait().expect("task should finish");
    assert_eq!(out.dork, "ABC");
    // wake runs right after the send; give the worker a moment
    std::thread::sleep(Duration::from_millis(50));
    assert!(*woke.lock().unwrap());
}

#[test]
fn superseded_task_never_lands() {
    let slow = Arc::new(Shouty::new(Duration::from_millis(200)));

    let first = EnhanceTask::spawn(
        slow.clone(),
        Estimator::fixed(600_000, Duration::ZERO),
        "first".to_string(),
        NullProgress,
        || {},
    );
    // User clicks Enhance again: previous round is cancelled.
    first.cancel();
    let second = EnhanceTask::spawn(
        slow.clone(),
        Estimator::fixed(5_000, Duration::ZERO),
        "second".to_string(),
        NullProgress,
        || {},
    );
    assert_ne!(first.id(), second.id());

    // Poll like the UI loop does until the second round is in.
    let mut state = AppState::default();
    let mut done = None;
    for _ in 0..200 {
        assert!(matches!(first.poll(), TaskPoll::Dropped), "cancelled task delivered");
        match second.poll() {
            TaskPoll::Done(out) => {
                done = Some(out);
                break;
            }
            TaskPoll::Optimized(dork) => assert_eq!(dork, "SECOND"),
            TaskPoll::Pending => std::thread::sleep(Duration::from_millis(10)),
            TaskPoll::Dropped => panic!("second task dropped"),
        }
    }
    let out = done.expect("second task should finish");
    state = state.reduce(Event::Enhanced(out));

    assert_eq!(state.dork, "SECOND");
    assert_eq!(state.analysis.suggestions, [SUGGEST_BROADEN]);
    assert!(first.wait().is_none());
}
