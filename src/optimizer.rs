// src/optimizer.rs
//
// Gemini rewording. Fail-open: whatever goes wrong, the caller gets its own
// dork back and the reason only shows up in the log.
use serde::{Deserialize, Serialize};

use crate::{
    config::{consts::API_KEY_HEADER, options::OptimizerOptions},
    core::net,
    error::{DorkError, Result},
};

pub trait Optimize: Send + Sync {
    /// Reworded dork, or `dork` itself when rewording is not possible.
    fn optimize(&self, dork: &str) -> String;
}

pub fn prompt_for(dork: &str) -> String {
    format!(
        "You are an expert in crafting precise Google dorks for targeted searches. \
         Your task is to refine the following dork for maximum accuracy and relevance:\n\n\
         {dork}\n\n\
         Return the optimized dork in plain text format ready for use."
    )
}

/* ---------- wire types ---------- */

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub fn single(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`, if every step is there.
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Pull the rewritten dork out of a raw response body.
pub fn extract_text(body: &str) -> Result<String> {
    let resp: GenerateResponse = serde_json::from_str(body)?;
    resp.first_text().ok_or(DorkError::MissingCandidate)
}

/* ---------- client ---------- */

#[derive(Clone, Debug)]
pub struct GeminiOptimizer {
    opts: OptimizerOptions,
}

impl GeminiOptimizer {
    pub fn new(opts: OptimizerOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &OptimizerOptions {
        &self.opts
    }

    /// One POST, no retries. Errors carry the reason the dork was not rewritten.
    pub fn try_optimize(&self, dork: &str) -> Result<String> {
        let key = self.opts.api_key.as_deref().ok_or(DorkError::MissingApiKey)?;

        let prompt = prompt_for(dork);
        let body = GenerateRequest::single(&prompt);
        let url = self.opts.generate_url();

        logd!("Optimize: POST {} (model={}, dork chars={})", url, self.opts.model, dork.chars().count());

        let raw = net::post_json(&url, &[(API_KEY_HEADER, key)], &body, self.opts.timeout_secs)?;
        extract_text(&raw)
    }
}

impl Optimize for GeminiOptimizer {
    fn optimize(&self, dork: &str) -> String {
        match self.try_optimize(dork) {
            Ok(text) => {
                logf!("Optimize: OK ({} → {} chars)", dork.chars().count(), text.chars().count());
                text
            }
            Err(DorkError::MissingCandidate) => {
                loge!("Optimize: Gemini API returned unexpected format, keeping original dork");
                s!(dork)
            }
            Err(e) => {
                loge!("Optimize: {}, keeping original dork", e);
                s!(dork)
            }
        }
    }
}
