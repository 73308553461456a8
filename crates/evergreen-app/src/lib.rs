//! Use case orchestration for the EvergreenOS image tooling.
//!
//! This crate coordinates the loaders, the compliance evaluator, the build steps, and the
//! renderers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod build;
mod explain;
mod metrics;
mod render;
mod report;
mod write;

pub use build::{BuildStep, run_build_step};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use metrics::{MetricsOutput, format_metrics, run_metrics};
pub use render::{render_annotations, render_markdown};
pub use report::{
    ReportInput, ReportOutput, resolve_repo_layout, run_report, serialize_receipt, to_renderable,
    verdict_exit_code,
};
pub use write::write_text_file;
