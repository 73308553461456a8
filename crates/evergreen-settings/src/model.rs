use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "evergreen.config.v1";

/// `evergreen.toml` schema v1.
///
/// Every field is optional; anything left out falls back to the canonical repository layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EvergreenConfigV1 {
    /// Optional schema string for tooling (`evergreen.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub paths: PathsConfig,
}

/// Repo-relative locations of the configuration artifacts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_policies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flatpak_remotes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeter_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_agent_unit: Option<String>,
}
