use crate::layout::{ArtifactKind, RepoLayout};
use crate::model::{EvergreenConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Per-invocation path overrides (typically CLI flags). These win over `evergreen.toml`.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub manifest: Option<String>,
    pub security_policies: Option<String>,
    pub flatpak_remotes: Option<String>,
    pub greeter_source: Option<String>,
    pub workflow: Option<String>,
    pub device_agent_unit: Option<String>,
}

pub fn resolve_layout(
    root: &Utf8Path,
    cfg: EvergreenConfigV1,
    overrides: Overrides,
) -> anyhow::Result<RepoLayout> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let paths = cfg.paths;
    let mut layout = RepoLayout::new(root);

    let entries = [
        (ArtifactKind::ComposeManifest, overrides.manifest.or(paths.manifest)),
        (
            ArtifactKind::SecurityPolicies,
            overrides.security_policies.or(paths.security_policies),
        ),
        (
            ArtifactKind::FlatpakRemotes,
            overrides.flatpak_remotes.or(paths.flatpak_remotes),
        ),
        (
            ArtifactKind::GreeterSource,
            overrides.greeter_source.or(paths.greeter_source),
        ),
        (ArtifactKind::Workflow, overrides.workflow.or(paths.workflow)),
        (
            ArtifactKind::DeviceAgentUnit,
            overrides.device_agent_unit.or(paths.device_agent_unit),
        ),
    ];

    for (kind, value) in entries {
        let Some(value) = value else { continue };
        let rel = validate_relative(&value)
            .with_context(|| format!("invalid path for {}", kind.label()))?;
        let slot = match kind {
            ArtifactKind::ComposeManifest => &mut layout.manifest,
            ArtifactKind::SecurityPolicies => &mut layout.security_policies,
            ArtifactKind::FlatpakRemotes => &mut layout.flatpak_remotes,
            ArtifactKind::GreeterSource => &mut layout.greeter_source,
            ArtifactKind::Workflow => &mut layout.workflow,
            ArtifactKind::DeviceAgentUnit => &mut layout.device_agent_unit,
        };
        *slot = rel;
    }

    Ok(layout)
}

fn validate_relative(value: &str) -> anyhow::Result<Utf8PathBuf> {
    let path = Utf8Path::new(value);
    if value.trim().is_empty() {
        anyhow::bail!("path is empty");
    }
    if path.is_absolute() || path.has_root() {
        anyhow::bail!("path must be repo-relative: {value}");
    }
    if path
        .components()
        .any(|c| matches!(c, Utf8Component::ParentDir | Utf8Component::Prefix(_)))
    {
        anyhow::bail!("path escapes the repository root: {value}");
    }
    Ok(path.to_path_buf())
}
