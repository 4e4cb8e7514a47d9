// src/gui/components/mod.rs
pub mod alert;
pub mod form_panel;
pub mod output_panel;
