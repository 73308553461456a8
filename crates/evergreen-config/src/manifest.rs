use crate::artifact::Artifact;
use crate::error::ConfigError;
use crate::flatpak::FlatpakRemote;
use crate::json;
use camino::Utf8Path;
use evergreen_settings::ArtifactKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const REQUIRED_KEYS: &[&str] = &["ref", "base_image"];

/// `base_image` block of the compose manifest.
///
/// Keys other than `name` and `version` are kept in `metadata`, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseImage {
    #[serde(default, deserialize_with = "json::string_or_number")]
    name: String,
    #[serde(default, deserialize_with = "json::string_or_number")]
    version: String,
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl BaseImage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }
}

/// Structured view of the rpm-ostree compose manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeManifest {
    reference: String,
    base_image: BaseImage,
    packages_install: Vec<String>,
    packages_remove: Vec<String>,
    overrides: BTreeMap<String, Vec<String>>,
    systemd_enable: Vec<String>,
    systemd_mask: Vec<String>,
    update_channels: Vec<String>,
    flatpak_remotes: Vec<FlatpakRemote>,
    default_kargs: Vec<String>,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(rename = "ref")]
    reference: String,
    base_image: BaseImage,
    #[serde(default)]
    packages: RawPackages,
    #[serde(default)]
    overrides: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    systemd: RawSystemd,
    #[serde(default)]
    update_channels: Vec<String>,
    #[serde(default)]
    flatpak_remotes: Vec<FlatpakRemote>,
    #[serde(default)]
    default_kargs: Vec<String>,
}

#[derive(Default, Deserialize)]
struct RawPackages {
    #[serde(default)]
    install: Vec<String>,
    #[serde(default)]
    remove: Vec<String>,
}

#[derive(Default, Deserialize)]
struct RawSystemd {
    #[serde(default)]
    enable: Vec<String>,
    #[serde(default)]
    mask: Vec<String>,
}

impl Artifact for ComposeManifest {
    const KIND: ArtifactKind = ArtifactKind::ComposeManifest;

    fn parse(path: &Utf8Path, text: &str) -> Result<Self, ConfigError> {
        let doc = json::parse_document(path, text)?;
        json::require_keys(path, &doc, REQUIRED_KEYS)?;
        let raw: RawManifest = json::decode(path, doc)?;

        Ok(ComposeManifest {
            reference: raw.reference,
            base_image: raw.base_image,
            packages_install: raw.packages.install,
            packages_remove: raw.packages.remove,
            overrides: raw.overrides,
            systemd_enable: raw.systemd.enable,
            systemd_mask: raw.systemd.mask,
            update_channels: raw.update_channels,
            flatpak_remotes: raw.flatpak_remotes,
            default_kargs: raw.default_kargs,
        })
    }
}

impl ComposeManifest {
    /// OSTree ref the compose produces (`ref` in the document).
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn base_image(&self) -> &BaseImage {
        &self.base_image
    }

    pub fn packages_install(&self) -> &[String] {
        &self.packages_install
    }

    pub fn packages_remove(&self) -> &[String] {
        &self.packages_remove
    }

    pub fn overrides(&self) -> &BTreeMap<String, Vec<String>> {
        &self.overrides
    }

    pub fn systemd_enable(&self) -> &[String] {
        &self.systemd_enable
    }

    pub fn systemd_mask(&self) -> &[String] {
        &self.systemd_mask
    }

    pub fn update_channels(&self) -> &[String] {
        &self.update_channels
    }

    pub fn flatpak_remotes(&self) -> &[FlatpakRemote] {
        &self.flatpak_remotes
    }

    pub fn default_kargs(&self) -> &[String] {
        &self.default_kargs
    }

    pub fn installs(&self, package: &str) -> bool {
        self.packages_install.iter().any(|p| p == package)
    }

    pub fn enables(&self, unit: &str) -> bool {
        self.systemd_enable.iter().any(|u| u == unit)
    }
}
