//! Structured view of the EvergreenOS build workflow and the PRD's CI expectations.

#![forbid(unsafe_code)]

mod expectations;
mod model;

pub use expectations::{
    BUILD_JOB, REQUIRED_BUILD_STEPS, REQUIRED_SMOKE_STEPS, SMOKE_JOB, WorkflowGap,
};
pub use model::{GitHubWorkflow, WorkflowJob, WorkflowStep};
