use evergreen_config::{
    Artifact, ArtifactKind, ComposeManifest, ConfigError, EnrollmentGreeterSource,
    FlatpakRemoteConfig, RepoLayout, SecurityPolicies,
};
use evergreen_prd::EvergreenOsPrd;
use evergreen_workflow::GitHubWorkflow;
use tracing::debug;

/// Everything the checks look at, read in one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RepositoryState {
    pub prd: EvergreenOsPrd,
    pub manifest: ComposeManifest,
    pub security: SecurityPolicies,
    pub flatpak_defaults: FlatpakRemoteConfig,
    pub greeter: EnrollmentGreeterSource,
    pub workflow: GitHubWorkflow,
    /// Whether the device-agent systemd unit file exists.
    pub device_agent_unit_present: bool,
}

impl RepositoryState {
    pub fn load(layout: &RepoLayout) -> Result<Self, ConfigError> {
        let unit = layout.path_for(ArtifactKind::DeviceAgentUnit);
        let device_agent_unit_present = unit.is_file();
        debug!(path = %unit, present = device_agent_unit_present, "checked device agent unit");

        Ok(RepositoryState {
            prd: EvergreenOsPrd::default(),
            manifest: ComposeManifest::load_in(layout, None)?,
            security: SecurityPolicies::load_in(layout, None)?,
            flatpak_defaults: FlatpakRemoteConfig::load_in(layout, None)?,
            greeter: EnrollmentGreeterSource::load_in(layout, None)?,
            workflow: GitHubWorkflow::load_in(layout, None)?,
            device_agent_unit_present,
        })
    }
}
