// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,enhance,generate,open_search}.

mod copy;      // src/gui/actions/copy.rs
mod enhance;   // src/gui/actions/enhance.rs
mod generate;  // src/gui/actions/generate.rs
mod open;      // src/gui/actions/open.rs

pub use copy::copy;
pub use enhance::enhance;
pub use generate::generate;
pub use open::open_search;
