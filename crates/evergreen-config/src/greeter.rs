use crate::artifact::Artifact;
use crate::error::ConfigError;
use crate::json;
use camino::Utf8Path;
use evergreen_settings::ArtifactKind;
use serde::Deserialize;

/// Pointer to the out-of-tree GTK enrollment greeter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentGreeterSource {
    repository_url: String,
    description: String,
}

#[derive(Deserialize)]
struct RawSource {
    repository: String,
    #[serde(default)]
    description: String,
}

impl Artifact for EnrollmentGreeterSource {
    const KIND: ArtifactKind = ArtifactKind::GreeterSource;

    fn parse(path: &Utf8Path, text: &str) -> Result<Self, ConfigError> {
        let doc = json::parse_document(path, text)?;
        json::require_keys(path, &doc, &["repository"])?;
        let raw: RawSource = json::decode(path, doc)?;
        Ok(EnrollmentGreeterSource {
            repository_url: raw.repository,
            description: raw.description,
        })
    }
}

impl EnrollmentGreeterSource {
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
