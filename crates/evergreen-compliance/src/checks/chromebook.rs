use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

// No firmware tooling exists in this repository yet.
pub fn run(_state: &RepositoryState) -> RequirementStatus {
    RequirementStatus::new(
        ids::REQ_CHROMEBOOK_SUPPORT,
        false,
        "Firmware flashing scripts or low-resource installation guidance are absent.",
    )
}
