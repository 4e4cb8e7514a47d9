// src/config/options.rs
//
// Runtime configuration. Nothing secret is compiled in: the API key only ever
// comes from the environment (or whatever lookup the caller hands us).
use std::fmt;
use std::time::Duration;

use super::consts::*;
use crate::error::{DorkError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub optimizer: OptimizerOptions,
    pub estimator: EstimatorOptions,
}

impl AppOptions {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from any key → value lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut opts = Self::default();

        if let Some(key) = get(ENV_API_KEY) {
            opts.optimizer.api_key = Some(key);
        }
        if let Some(model) = get(ENV_MODEL) {
            opts.optimizer.model = model;
        }
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            opts.optimizer.endpoint = endpoint;
        }
        if let Some(v) = get(ENV_TIMEOUT) {
            opts.optimizer.timeout_secs = parse_u64(ENV_TIMEOUT, &v)?;
        }
        if let Some(v) = get(ENV_ESTIMATE_DELAY) {
            opts.estimator.delay_ms = parse_u64(ENV_ESTIMATE_DELAY, &v)?;
        }

        Ok(opts)
    }
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| DorkError::Config(format!("{key} must be a whole number, got {value:?}")))
}

#[derive(Clone, PartialEq, Eq)]
pub struct OptimizerOptions {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(GEMINI_ENDPOINT),
            model: s!(GEMINI_MODEL),
            api_key: None,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl OptimizerOptions {
    /// `<endpoint>/v1beta/models/<model>:generateContent`
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

// Never print the key.
impl fmt::Debug for OptimizerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizerOptions")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorOptions {
    pub delay_ms: u64,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self { delay_ms: ESTIMATE_DELAY_MS }
    }
}

impl EstimatorOptions {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
