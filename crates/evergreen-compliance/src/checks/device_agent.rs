use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

pub fn run(state: &RepositoryState) -> RequirementStatus {
    let implemented = state.manifest.installs(ids::PKG_DEVICE_AGENT)
        && state.manifest.enables(ids::UNIT_DEVICE_AGENT)
        && state.device_agent_unit_present;

    let details = if implemented {
        "Device agent packaged, enabled at boot, and systemd unit provided."
    } else {
        "Device agent configuration incomplete."
    };
    RequirementStatus::new(ids::REQ_DEVICE_AGENT_INTEGRATION, implemented, details)
}
