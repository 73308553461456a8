use crate::state::RepositoryState;
use evergreen_types::{RequirementStatus, ids};

// Secure boot and auditing are recorded in the policy file but not gated here.
pub fn run(state: &RepositoryState) -> RequirementStatus {
    let policies = &state.security;
    let implemented = policies.selinux_mode() == "enforcing"
        && !policies.ssh_enabled()
        && policies.usbguard_default_policy() == "block"
        && policies.firewall_allows(ids::PKG_DEVICE_AGENT)
        && policies.tpm_auto_unlock();

    let details = if implemented {
        "SELinux enforcing, SSH disabled, USBGuard blocking, firewall restricted, and disk encryption policies codified."
    } else {
        "Security policies incomplete."
    };
    RequirementStatus::new(ids::REQ_SECURITY_HARDENING, implemented, details)
}
