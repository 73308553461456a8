use crate::metrics::MetricThreshold;
use evergreen_types::ids;
use serde_json::{Map, Value};

const GOALS: [&str; 6] = [
    "Provide a fast, minimal, secure OS tailored for schools.",
    "Support both fresh installs and upgrades via OSTree.",
    "Boot reliably with atomic rollback if updates fail.",
    "Preconfigure EvergreenOS for zero-touch enrollment with device-agent.",
    "Ensure compatibility with older Chromebooks (EOL hardware repurpose).",
    "Automate CI builds for repeatable artifacts.",
];

const NON_GOALS: [&str; 4] = [
    "Provide a mutable user-facing package manager.",
    "Develop a custom kernel beyond Fedora defaults.",
    "Ship an app store frontend within the OS image.",
    "Distribute proprietary firmware.",
];

const UPDATE_CHANNELS: [&str; 3] = ["stable", "beta", "dev"];

const SECURITY_REQUIREMENTS: [(&str, &str); 8] = [
    ("selinux", "enforcing"),
    ("ssh", "disabled"),
    ("usbguard", "enabled"),
    ("firewall", "minimal_open_ports"),
    ("disk_encryption", "luks2_tpm_auto_unlock"),
    ("secure_boot", "planned"),
    ("artifact_signing", "gpg_ostree_and_iso_signatures"),
    ("device_agent_policies", "enforced"),
];

/// What the PRD expects at one top-level entry of the repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutExpectation {
    /// A directory with the listed subdirectories, optionally holding a manifest file.
    Directory {
        manifest: Option<&'static str>,
        subdirectories: &'static [&'static str],
    },
    /// A set of files.
    Files(&'static [&'static str]),
}

/// Canonical product requirements for the EvergreenOS image.
#[derive(Clone, Debug, PartialEq)]
pub struct EvergreenOsPrd {
    goals: Vec<&'static str>,
    non_goals: Vec<&'static str>,
    update_channels: Vec<&'static str>,
    repository_layout: Vec<(&'static str, LayoutExpectation)>,
    security_requirements: Vec<(&'static str, &'static str)>,
    success_metric_thresholds: Vec<(&'static str, MetricThreshold)>,
}

impl Default for EvergreenOsPrd {
    fn default() -> Self {
        let repository_layout = vec![
            (
                "configs",
                LayoutExpectation::Directory {
                    manifest: Some("manifest.yaml"),
                    subdirectories: &["branding", "services", "defaults", "security"],
                },
            ),
            (
                "docs",
                LayoutExpectation::Files(&["prd.md", "build-instructions.md"]),
            ),
            (
                "enrollment-ui",
                LayoutExpectation::Directory {
                    manifest: None,
                    subdirectories: &["greeter"],
                },
            ),
            (
                "build",
                LayoutExpectation::Directory {
                    manifest: None,
                    subdirectories: &["scripts", "iso", "ci"],
                },
            ),
            (
                "artifacts",
                LayoutExpectation::Directory {
                    manifest: None,
                    subdirectories: &["iso", "ostree", "qemu"],
                },
            ),
            (
                "root_files",
                LayoutExpectation::Files(&["README.md", "Makefile", "Dockerfile"]),
            ),
        ];

        let success_metric_thresholds = vec![
            (ids::METRIC_FRESH_INSTALL_BOOT_SECONDS, MetricThreshold::Max(60.0)),
            (ids::METRIC_ENROLLMENT_COMPLETION_SECONDS, MetricThreshold::Max(120.0)),
            (ids::METRIC_POLICY_APPLICATION_SECONDS, MetricThreshold::Max(300.0)),
            (ids::METRIC_CI_PIPELINE_ARTIFACTS, MetricThreshold::Flag(true)),
            (ids::METRIC_UPDATE_ROLLBACK_VERIFIED, MetricThreshold::Flag(true)),
            (
                ids::METRIC_ARTIFACT_SIGNATURES_STATUS,
                MetricThreshold::Exact("verified".to_string()),
            ),
        ];

        Self {
            goals: GOALS.to_vec(),
            non_goals: NON_GOALS.to_vec(),
            update_channels: UPDATE_CHANNELS.to_vec(),
            repository_layout,
            security_requirements: SECURITY_REQUIREMENTS.to_vec(),
            success_metric_thresholds,
        }
    }
}

impl EvergreenOsPrd {
    pub fn goals(&self) -> &[&'static str] {
        &self.goals
    }

    pub fn non_goals(&self) -> &[&'static str] {
        &self.non_goals
    }

    pub fn update_channels(&self) -> &[&'static str] {
        &self.update_channels
    }

    pub fn repository_layout(&self) -> &[(&'static str, LayoutExpectation)] {
        &self.repository_layout
    }

    pub fn security_requirements(&self) -> &[(&'static str, &'static str)] {
        &self.security_requirements
    }

    pub fn security_requirement(&self, control: &str) -> Option<&'static str> {
        self.security_requirements
            .iter()
            .find(|(name, _)| *name == control)
            .map(|(_, expectation)| *expectation)
    }

    /// Thresholds in canonical order.
    pub fn success_metric_thresholds(&self) -> &[(&'static str, MetricThreshold)] {
        &self.success_metric_thresholds
    }

    /// Identifiers of the metrics `observed` fails, in canonical order. Empty means all met.
    pub fn validate_success_metrics(&self, observed: &Map<String, Value>) -> Vec<&'static str> {
        self.success_metric_thresholds
            .iter()
            .filter(|(metric, threshold)| !threshold.is_met(observed.get(*metric)))
            .map(|(metric, _)| *metric)
            .collect()
    }
}
