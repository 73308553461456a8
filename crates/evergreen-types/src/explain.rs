//! Explain registry for PRD requirements.
//!
//! Maps requirement IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a requirement.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the requirement.
    pub title: &'static str,
    /// What the requirement checks and where the evidence lives.
    pub description: &'static str,
    /// How to satisfy it.
    pub remediation: &'static str,
    /// Before/after configuration snippets.
    pub examples: ExamplePair,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that leaves the requirement missing.
    pub before: &'static str,
    /// Configuration that satisfies it.
    pub after: &'static str,
}

/// Look up an explanation by requirement ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::REQ_BASE_IMAGE_COMPOSITION => Some(explain_base_image_composition()),
        ids::REQ_DEVICE_AGENT_INTEGRATION => Some(explain_device_agent_integration()),
        ids::REQ_ENROLLMENT_UI => Some(explain_enrollment_ui()),
        ids::REQ_FLATPAK_REMOTES => Some(explain_flatpak_remotes()),
        ids::REQ_SECURITY_HARDENING => Some(explain_security_hardening()),
        ids::REQ_UPDATE_CHANNELS => Some(explain_update_channels()),
        ids::REQ_CI_PIPELINE => Some(explain_ci_pipeline()),
        ids::REQ_CHROMEBOOK_SUPPORT => Some(explain_chromebook_support()),
        _ => None,
    }
}

/// List all known requirement IDs, in evaluation order.
pub fn all_requirement_ids() -> &'static [&'static str] {
    &ids::REQUIREMENT_IDS
}

fn explain_base_image_composition() -> Explanation {
    Explanation {
        title: "Base Image Composition",
        description: "\
The compose manifest (configs/manifest.yaml) must target Fedora Silverblue and
layer the EvergreenOS packages on top of it.

The check passes when:
- `base_image.name` is exactly `fedora-silverblue`
- `packages.install` lists `evergreen-device-agent`
- `packages.install` lists `evergreen-enrollment-greeter`",
        remediation: "\
Point the manifest at the Silverblue base and add both Evergreen packages to the
install list. Extra packages are fine.",
        examples: ExamplePair {
            before: r#"{
  "base_image": { "name": "fedora-workstation", "version": "39" },
  "packages": { "install": ["evergreen-device-agent"] }
}"#,
            after: r#"{
  "base_image": { "name": "fedora-silverblue", "version": "39" },
  "packages": {
    "install": ["evergreen-device-agent", "evergreen-enrollment-greeter"]
  }
}"#,
        },
    }
}

fn explain_device_agent_integration() -> Explanation {
    Explanation {
        title: "Device Agent Integration",
        description: "\
The device agent must be installed, enabled at boot, and shipped with a systemd
unit file.

The check passes when:
- `packages.install` lists `evergreen-device-agent`
- `systemd.enable` lists `evergreen-device-agent.service`
- configs/services/evergreen-device-agent.service exists on disk",
        remediation: "\
Install the package, enable the unit in the manifest, and commit the unit file
under configs/services/.",
        examples: ExamplePair {
            before: r#"{ "systemd": { "enable": [] } }"#,
            after: r#"{ "systemd": { "enable": ["evergreen-device-agent.service"] } }"#,
        },
    }
}

fn explain_enrollment_ui() -> Explanation {
    Explanation {
        title: "Enrollment UI",
        description: "\
The GTK enrollment greeter lives in its own repository. This repository only
carries a pointer to it (enrollment-ui/greeter/source.json).

The check passes when the pointer has a non-empty `repository` URL. The content
of the external repository is never inspected.",
        remediation: "\
Set `repository` in enrollment-ui/greeter/source.json to the greeter's git URL.",
        examples: ExamplePair {
            before: r#"{ "repository": "" }"#,
            after: r#"{
  "repository": "https://github.com/evergreen-os/enrollment-greeter",
  "description": "GTK enrollment greeter"
}"#,
        },
    }
}

fn explain_flatpak_remotes() -> Explanation {
    Explanation {
        title: "Flatpak Remotes",
        description: "\
Both Flathub and the Evergreen App Catalog must be preconfigured.

The check passes when:
- the compose manifest declares at least two `flatpak_remotes`
- configs/defaults/flatpak-remotes.conf defines a `flathub` and an `evergreen` remote",
        remediation: "\
Declare both remotes in the manifest and add a `[Flatpak Remote \"<name>\"]`
section for each to the defaults file.",
        examples: ExamplePair {
            before: r#"[Flatpak Remote "flathub"]
Url=https://dl.flathub.org/repo/"#,
            after: r#"[Flatpak Remote "flathub"]
Url=https://dl.flathub.org/repo/

[Flatpak Remote "evergreen"]
Url=https://apps.evergreen-os.dev/repo/"#,
        },
    }
}

fn explain_security_hardening() -> Explanation {
    Explanation {
        title: "Security Hardening",
        description: "\
The security policy file (configs/security/policies.yaml) must codify the
hardening baseline.

The check passes when:
- `selinux.mode` is `enforcing`
- `ssh.enabled` is false
- `usbguard.default_policy` is `block`
- `firewall.allowed_services` lists `evergreen-device-agent`
- `disk_encryption.tpm_auto_unlock` is true",
        remediation: "\
Tighten each policy to the values above. Secure boot and auditing are recorded
but not gated.",
        examples: ExamplePair {
            before: r#"{ "selinux": { "mode": "permissive" }, "ssh": { "enabled": true } }"#,
            after: r#"{ "selinux": { "mode": "enforcing" }, "ssh": { "enabled": false } }"#,
        },
    }
}

fn explain_update_channels() -> Explanation {
    Explanation {
        title: "Update Channels",
        description: "\
The compose manifest must declare every PRD update channel: stable, beta, and
dev. Additional channels are allowed.",
        remediation: "Add the missing channels to `update_channels` in the manifest.",
        examples: ExamplePair {
            before: r#"{ "update_channels": ["stable"] }"#,
            after: r#"{ "update_channels": ["stable", "beta", "dev"] }"#,
        },
    }
}

fn explain_ci_pipeline() -> Explanation {
    Explanation {
        title: "CI Pipeline",
        description: "\
The build workflow (.github/workflows/build.yml) must build and smoke-test the
image.

The check passes when the workflow has a `build-artifacts` job and a
`smoke-test` job, and each contains its required steps. Extra jobs and steps are
ignored.",
        remediation: "\
Add the missing jobs or steps. Step names must match exactly; run
`evergreen report --format md` to list the gaps.",
        examples: ExamplePair {
            before: r#"{ "jobs": { "build-artifacts": { "steps": [{ "name": "Checkout" }] } } }"#,
            after: r#"{
  "jobs": {
    "build-artifacts": { "steps": [{ "name": "Checkout" }, "..."] },
    "smoke-test": { "needs": "build-artifacts", "steps": ["..."] }
  }
}"#,
        },
    }
}

fn explain_chromebook_support() -> Explanation {
    Explanation {
        title: "Chromebook Support",
        description: "\
EOL Chromebooks need firmware flashing scripts and low-resource installation
guidance. Neither exists yet, so this requirement always reports missing.",
        remediation: "\
Not actionable through configuration. Track the firmware and installer work
separately.",
        examples: ExamplePair {
            before: "(no firmware tooling)",
            after: "(firmware flashing scripts and low-resource install guide)",
        },
    }
}
