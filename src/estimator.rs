// src/estimator.rs
//
// Simulated result analysis. Nothing here looks at the dork's real result
// count: the number is drawn at random and the advice follows the number.
use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    config::{consts::*, options::EstimatorOptions},
    enhance::CancelToken,
};

pub const SUGGEST_NARROW: &str = "Try adding more specific keywords to narrow down the results.";
pub const SUGGEST_BROADEN: &str =
    "Consider broadening your search terms to increase the number of results.";
pub const SUGGEST_OK: &str =
    "The dork seems well-optimized.  Consider testing different variations.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    pub estimated_results_label: String,
    pub suggestions: Vec<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::placeholder(LABEL_FETCHING)
    }
}

impl AnalysisResult {
    /// Label only, no suggestions.
    pub fn placeholder(label: &str) -> Self {
        Self { estimated_results_label: s!(label), suggestions: Vec::new() }
    }
}

/// Label and single suggestion for a given count.
pub fn analysis_for_count(count: u32) -> AnalysisResult {
    let suggestion = if count > NARROW_ABOVE {
        SUGGEST_NARROW
    } else if count < BROADEN_BELOW {
        SUGGEST_BROADEN
    } else {
        SUGGEST_OK
    };

    AnalysisResult {
        estimated_results_label: format!("{count}+ (simulated)"),
        suggestions: vec![s!(suggestion)],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountSource {
    Random,
    Fixed(u32),
}

#[derive(Clone, Debug)]
pub struct Estimator {
    delay: Duration,
    source: CountSource,
}

impl Estimator {
    pub fn new(opts: &EstimatorOptions) -> Self {
        Self { delay: opts.delay(), source: CountSource::Random }
    }

    /// Always reports `count`; for tests and demos.
    pub fn fixed(count: u32, delay: Duration) -> Self {
        Self { delay, source: CountSource::Fixed(count) }
    }

    fn draw(&self) -> u32 {
        match self.source {
            CountSource::Random => rand::thread_rng().gen_range(0..ESTIMATE_MAX),
            CountSource::Fixed(n) => n,
        }
    }

    /// Wait out the simulated latency, then produce an analysis.
    /// `None` if `cancel` fires during the wait.
    pub fn estimate(&self, dork: &str, cancel: &CancelToken) -> Option<AnalysisResult> {
        logw!("Estimate: Simulating search result analysis (no real search is performed)");
        logd!("Estimate: dork chars={}, delay={:?}", dork.chars().count(), self.delay);

        if !sleep_unless_cancelled(self.delay, cancel) {
            logd!("Estimate: Cancelled during delay");
            return None;
        }

        let count = self.draw();
        logf!("Estimate: count={} (simulated)", count);
        Some(analysis_for_count(count))
    }
}

/// Sleep in short slices; `false` if cancelled before the time is up.
fn sleep_unless_cancelled(total: Duration, cancel: &CancelToken) -> bool {
    let deadline = Instant::now() + total;
    let slice = Duration::from_millis(CANCEL_POLL_MS);
    loop {
        if cancel.is_cancelled() {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        std::thread::sleep(slice.min(deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(analysis_for_count(500_000).suggestions, [SUGGEST_OK]);
        assert_eq!(analysis_for_count(500_001).suggestions, [SUGGEST_NARROW]);
        assert_eq!(analysis_for_count(10_000).suggestions, [SUGGEST_OK]);
        assert_eq!(analysis_for_count(9_999).suggestions, [SUGGEST_BROADEN]);
    }

    #[test]
    fn random_draw_stays_in_range() {
        let est = Estimator { delay: Duration::ZERO, source: CountSource::Random };
        for _ in 0..1_000 {
            assert!(est.draw() < ESTIMATE_MAX);
        }
    }

    #[test]
    fn cancelled_before_wait_gives_none() {
        let token = CancelToken::new();
        token.cancel();
        let est = Estimator::fixed(1, Duration::from_secs(5));
        assert_eq!(est.estimate("d", &token), None);
    }
}
