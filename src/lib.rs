// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod form;

pub mod enhance;
pub mod estimator;
pub mod gui;
pub mod optimizer;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{DorkError, Result};
