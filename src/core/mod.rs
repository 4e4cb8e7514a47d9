// src/core/mod.rs

pub mod dork;
pub mod net;

pub use dork::{assemble, search_url};
