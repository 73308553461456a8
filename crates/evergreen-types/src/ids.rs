//! Stable identifiers for requirements and success metrics.
//!
//! Requirement IDs are snake_case and appear verbatim in receipts. The order of
//! [`REQUIREMENT_IDS`] is the evaluation order of the compliance report.

// Requirements
pub const REQ_BASE_IMAGE_COMPOSITION: &str = "base_image_composition";
pub const REQ_DEVICE_AGENT_INTEGRATION: &str = "device_agent_integration";
pub const REQ_ENROLLMENT_UI: &str = "enrollment_ui";
pub const REQ_FLATPAK_REMOTES: &str = "flatpak_remotes";
pub const REQ_SECURITY_HARDENING: &str = "security_hardening";
pub const REQ_UPDATE_CHANNELS: &str = "update_channels";
pub const REQ_CI_PIPELINE: &str = "ci_pipeline";
pub const REQ_CHROMEBOOK_SUPPORT: &str = "chromebook_support";

pub const REQUIREMENT_IDS: [&str; 8] = [
    REQ_BASE_IMAGE_COMPOSITION,
    REQ_DEVICE_AGENT_INTEGRATION,
    REQ_ENROLLMENT_UI,
    REQ_FLATPAK_REMOTES,
    REQ_SECURITY_HARDENING,
    REQ_UPDATE_CHANNELS,
    REQ_CI_PIPELINE,
    REQ_CHROMEBOOK_SUPPORT,
];

// Success metrics
pub const METRIC_FRESH_INSTALL_BOOT_SECONDS: &str = "fresh_install_boot_seconds";
pub const METRIC_ENROLLMENT_COMPLETION_SECONDS: &str = "enrollment_completion_seconds";
pub const METRIC_POLICY_APPLICATION_SECONDS: &str = "policy_application_seconds";
pub const METRIC_CI_PIPELINE_ARTIFACTS: &str = "ci_pipeline_artifacts";
pub const METRIC_UPDATE_ROLLBACK_VERIFIED: &str = "update_rollback_verified";
pub const METRIC_ARTIFACT_SIGNATURES_STATUS: &str = "artifact_signatures_status";

// Packages and units the checks look for
pub const PKG_DEVICE_AGENT: &str = "evergreen-device-agent";
pub const PKG_ENROLLMENT_GREETER: &str = "evergreen-enrollment-greeter";
pub const UNIT_DEVICE_AGENT: &str = "evergreen-device-agent.service";

pub const BASE_IMAGE_SILVERBLUE: &str = "fedora-silverblue";

pub const REMOTE_FLATHUB: &str = "flathub";
pub const REMOTE_EVERGREEN: &str = "evergreen";

// Tool-level
pub const TOOL_NAME: &str = "evergreen";
