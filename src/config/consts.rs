// src/config/consts.rs

// Form vocabulary
pub const KNOWN_GATEWAYS: [&str; 12] = [
    "Cielo", "PagSeguro", "Pagarme", "Zoop", "Ebanx", "Erede",
    "Safrapay", "Braspag", "Getnet", "Adyen", "Iugu", "Assas",
];
pub const KNOWN_DOMAINS: [&str; 2] = [".br", ".com"];
pub const DEFAULT_GATEWAYS: [&str; 2] = ["Cielo", "PagSeguro"];
pub const DEFAULT_DOMAINS: [&str; 2] = [".br", ".com"];

// Search test
pub const SEARCH_URL: &str = "https://www.google.com/search";

// Optimizer (Gemini)
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Estimator
pub const ESTIMATE_DELAY_MS: u64 = 1_000;
pub const ESTIMATE_MAX: u32 = 1_000_000; // exclusive
pub const NARROW_ABOVE: u32 = 500_000;
pub const BROADEN_BELOW: u32 = 10_000;
pub const CANCEL_POLL_MS: u64 = 50;

// Display
pub const LABEL_FETCHING: &str = "Fetching...";
pub const LABEL_AWAITING: &str = "Awaiting analysis...";
pub const COPIED_ALERT: &str = "Dork copied to clipboard!";

// Environment
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_ENDPOINT: &str = "GEMINI_ENDPOINT";
pub const ENV_TIMEOUT: &str = "DORKGEN_TIMEOUT_SECS";
pub const ENV_ESTIMATE_DELAY: &str = "DORKGEN_ESTIMATE_DELAY_MS";
pub const ENV_DEBUG: &str = "DORKGEN_DEBUG";
pub const ENV_LOG_FILE: &str = "DORKGEN_LOG_FILE";
