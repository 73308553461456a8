use crate::error::BuildError;
use crate::fsio;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

pub const COMPOSE_RESULT: &str = "compose.json";

/// Placeholder description of an rpm-ostree commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeResult {
    pub manifest: String,
    /// SHA-256 of the manifest bytes, lowercase hex.
    pub checksum: String,
    pub packages: Vec<String>,
}

/// Simulate `rpm-ostree compose`: record the manifest's checksum and package list.
pub fn compose(manifest: &Utf8Path, output: &Utf8Path) -> Result<Utf8PathBuf, BuildError> {
    fsio::require_file("manifest", manifest)?;
    fsio::create_dir_all(output)?;

    let bytes = fsio::read_bytes(manifest)?;
    let result = ComposeResult {
        manifest: manifest.to_string(),
        checksum: hex::encode(Sha256::digest(&bytes)),
        packages: extract_packages(&String::from_utf8_lossy(&bytes)),
    };

    let artifact = output.join(COMPOSE_RESULT);
    fsio::write_json(&artifact, &result)?;
    Ok(artifact)
}

/// `packages.install` of a JSON manifest, or the `- name` list items of any other text.
fn extract_packages(text: &str) -> Vec<String> {
    let Ok(doc) = serde_json::from_str::<Value>(text) else {
        return list_items(text);
    };
    doc.get("packages")
        .and_then(|p| p.get("install"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn list_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty() && !candidate.contains(' '))
        .map(str::to_string)
        .collect()
}
