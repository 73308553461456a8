use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

pub fn run(state: &RepositoryState) -> RequirementStatus {
    let implemented = state.workflow.meets_prd_expectations();

    let details = if implemented {
        "GitHub Actions workflow builds rpm-ostree commits, ISOs, and QEMU smoke tests."
    } else {
        "GitHub Actions workflow missing or incomplete; automated builds for OSTree, ISOs, and QEMU verification are not satisfied."
    };
    RequirementStatus::new(ids::REQ_CI_PIPELINE, implemented, details)
}
