//! Tabulates a JSON catalogue of material parameters into parallel
//! values/units/references/notes tables and renders them as CSV, XLSX and
//! LaTeX `longtable` output.

pub mod common;
pub mod domain;
pub mod modules;

pub use common::config::PipelineConfig;
pub use domain::{MattabError, MattabErrorCategory, MattabResult};
pub use modules::{RunReport, render_human_summary, run_pipeline};
