use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

pub fn run(state: &RepositoryState) -> RequirementStatus {
    let manifest = &state.manifest;
    let implemented = manifest.base_image().name() == ids::BASE_IMAGE_SILVERBLUE
        && manifest.installs(ids::PKG_DEVICE_AGENT)
        && manifest.installs(ids::PKG_ENROLLMENT_GREETER);

    let details = if implemented {
        "rpm-ostree compose manifest targeting Fedora Silverblue with Evergreen packages and services."
    } else {
        "Compose manifest missing or not targeting Fedora Silverblue."
    };
    RequirementStatus::new(ids::REQ_BASE_IMAGE_COMPOSITION, implemented, details)
}
