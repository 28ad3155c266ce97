// src/gui/components/mod.rs
pub mod controls;
pub mod log_pane;
pub mod results_table;
