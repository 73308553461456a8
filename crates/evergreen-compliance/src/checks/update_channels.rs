use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

pub fn run(state: &RepositoryState) -> RequirementStatus {
    let declared = state.manifest.update_channels();
    let implemented = state
        .prd
        .update_channels()
        .iter()
        .all(|channel| declared.iter().any(|d| d == channel));

    let details = if implemented {
        "rpm-ostree manifest declares stable, beta, and dev channels."
    } else {
        "Update channel configuration missing from compose manifest."
    };
    RequirementStatus::new(ids::REQ_UPDATE_CHANNELS, implemented, details)
}
