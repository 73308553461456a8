use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

/// Presence of the pointer only; the external greeter repository is never fetched.
pub fn run(state: &RepositoryState) -> RequirementStatus {
    let url = state.greeter.repository_url();
    let implemented = !url.is_empty();

    let details = if implemented {
        format!("Enrollment greeter sourced from external repository at {url}.")
    } else {
        "No GTK greeter application or configuration is present.".to_string()
    };
    RequirementStatus::new(ids::REQ_ENROLLMENT_UI, implemented, details)
}
