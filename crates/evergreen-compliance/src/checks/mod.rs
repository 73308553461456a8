use crate::state::RepositoryState;
use evergreen_types::RequirementStatus;

mod base_image;
mod chromebook;
mod ci_pipeline;
mod device_agent;
mod enrollment_ui;
mod flatpak_remotes;
mod security;
mod update_channels;

/// Every requirement, in evaluation order.
pub fn run_all(state: &RepositoryState) -> Vec<RequirementStatus> {
    vec![
        base_image::run(state),
        device_agent::run(state),
        enrollment_ui::run(state),
        flatpak_remotes::run(state),
        security::run(state),
        update_channels::run(state),
        ci_pipeline::run(state),
        chromebook::run(state),
    ]
}
