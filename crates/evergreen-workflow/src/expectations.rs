use crate::model::{GitHubWorkflow, WorkflowJob};
use std::fmt;

pub const BUILD_JOB: &str = "build-artifacts";
pub const SMOKE_JOB: &str = "smoke-test";

/// Steps the build job must contain, in the order the canonical workflow runs them.
pub const REQUIRED_BUILD_STEPS: [&str; 7] = [
    "Checkout",
    "Set up Rust toolchain",
    "Install build tooling",
    "Compose rpm-ostree image",
    "Generate installer ISO",
    "Package QEMU test image",
    "Upload build artifacts",
];

pub const REQUIRED_SMOKE_STEPS: [&str; 3] = [
    "Checkout",
    "Download build artifacts",
    "Boot QEMU smoke test",
];

/// Something the workflow lacks relative to the CI requirement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkflowGap {
    MissingJob { job: &'static str },
    MissingStep { job: &'static str, step: &'static str },
}

impl fmt::Display for WorkflowGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowGap::MissingJob { job } => write!(f, "missing job `{job}`"),
            WorkflowGap::MissingStep { job, step } => {
                write!(f, "job `{job}` is missing step `{step}`")
            }
        }
    }
}

impl GitHubWorkflow {
    /// Every required job and step that is absent. Extra jobs and steps are never gaps.
    pub fn expectation_gaps(&self) -> Vec<WorkflowGap> {
        let mut gaps = Vec::new();
        check_job(self.job(BUILD_JOB), BUILD_JOB, &REQUIRED_BUILD_STEPS, &mut gaps);
        check_job(self.job(SMOKE_JOB), SMOKE_JOB, &REQUIRED_SMOKE_STEPS, &mut gaps);
        gaps
    }

    /// Both required jobs exist and each carries its required steps (in any order).
    pub fn meets_prd_expectations(&self) -> bool {
        self.expectation_gaps().is_empty()
    }
}

fn check_job(
    job: Option<&WorkflowJob>,
    id: &'static str,
    required: &[&'static str],
    gaps: &mut Vec<WorkflowGap>,
) {
    let Some(job) = job else {
        gaps.push(WorkflowGap::MissingJob { job: id });
        return;
    };
    for step in required {
        if !job.has_step(step) {
            gaps.push(WorkflowGap::MissingStep { job: id, step: *step });
        }
    }
}
