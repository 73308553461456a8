use camino::{Utf8Path, Utf8PathBuf};

/// The configuration artifacts a repository layout knows how to locate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    ComposeManifest,
    SecurityPolicies,
    FlatpakRemotes,
    GreeterSource,
    Workflow,
    DeviceAgentUnit,
}

impl ArtifactKind {
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::ComposeManifest => "compose manifest",
            ArtifactKind::SecurityPolicies => "security policies",
            ArtifactKind::FlatpakRemotes => "flatpak remote defaults",
            ArtifactKind::GreeterSource => "enrollment greeter source",
            ArtifactKind::Workflow => "CI workflow",
            ArtifactKind::DeviceAgentUnit => "device agent unit",
        }
    }

    pub fn default_relative_path(self) -> &'static str {
        match self {
            ArtifactKind::ComposeManifest => "configs/manifest.yaml",
            ArtifactKind::SecurityPolicies => "configs/security/policies.yaml",
            ArtifactKind::FlatpakRemotes => "configs/defaults/flatpak-remotes.conf",
            ArtifactKind::GreeterSource => "enrollment-ui/greeter/source.json",
            ArtifactKind::Workflow => ".github/workflows/build.yml",
            ArtifactKind::DeviceAgentUnit => "configs/services/evergreen-device-agent.service",
        }
    }
}

/// Repository root plus the repo-relative location of each configuration artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoLayout {
    pub root: Utf8PathBuf,
    pub manifest: Utf8PathBuf,
    pub security_policies: Utf8PathBuf,
    pub flatpak_remotes: Utf8PathBuf,
    pub greeter_source: Utf8PathBuf,
    pub workflow: Utf8PathBuf,
    pub device_agent_unit: Utf8PathBuf,
}

impl RepoLayout {
    /// Default layout anchored at `root`.
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: ArtifactKind::ComposeManifest.default_relative_path().into(),
            security_policies: ArtifactKind::SecurityPolicies.default_relative_path().into(),
            flatpak_remotes: ArtifactKind::FlatpakRemotes.default_relative_path().into(),
            greeter_source: ArtifactKind::GreeterSource.default_relative_path().into(),
            workflow: ArtifactKind::Workflow.default_relative_path().into(),
            device_agent_unit: ArtifactKind::DeviceAgentUnit.default_relative_path().into(),
        }
    }

    /// Default layout anchored at this workspace's root (the directory holding `configs/`).
    pub fn canonical() -> Self {
        Self::new(canonical_root())
    }

    pub fn relative_path(&self, kind: ArtifactKind) -> &Utf8Path {
        match kind {
            ArtifactKind::ComposeManifest => &self.manifest,
            ArtifactKind::SecurityPolicies => &self.security_policies,
            ArtifactKind::FlatpakRemotes => &self.flatpak_remotes,
            ArtifactKind::GreeterSource => &self.greeter_source,
            ArtifactKind::Workflow => &self.workflow,
            ArtifactKind::DeviceAgentUnit => &self.device_agent_unit,
        }
    }

    /// Absolute (root-joined) location of an artifact.
    pub fn path_for(&self, kind: ArtifactKind) -> Utf8PathBuf {
        self.root.join(self.relative_path(kind))
    }
}

fn canonical_root() -> Utf8PathBuf {
    // crates/evergreen-settings -> crates -> workspace root
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Utf8Path::parent)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
