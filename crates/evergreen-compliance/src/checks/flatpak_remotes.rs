use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

pub fn run(state: &RepositoryState) -> RequirementStatus {
    let defaults = &state.flatpak_defaults;
    let implemented = state.manifest.flatpak_remotes().len() >= 2
        && defaults.contains(ids::REMOTE_FLATHUB)
        && defaults.contains(ids::REMOTE_EVERGREEN);

    let details = if implemented {
        "Flatpak remotes for Flathub and Evergreen App Catalog are preconfigured."
    } else {
        "Flatpak remote definitions are incomplete."
    };
    RequirementStatus::new(ids::REQ_FLATPAK_REMOTES, implemented, details)
}
