use crate::error::BuildError;
use crate::fsio;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde_json::{Map, Value, json};

pub const CHANNELS: [&str; 3] = ["stable", "beta", "dev"];
pub const PUBLISH_SUMMARY: &str = "summary.json";

#[derive(Serialize)]
struct PublishSummary<'a> {
    version: &'a str,
    timestamp: String,
    source: String,
    channels: Map<String, Value>,
    gpg_key: Option<&'a str>,
}

/// Publish `source` into one directory per release channel and write `summary.json`.
///
/// Signing is not performed; `gpg_key` is only recorded.
pub fn publish(
    source: &Utf8Path,
    destination: &Utf8Path,
    version: &str,
    gpg_key: Option<&str>,
) -> Result<Utf8PathBuf, BuildError> {
    fsio::require_exists("OSTree source directory", source)?;
    fsio::create_dir_all(destination)?;

    let mut channels = Map::new();
    for channel in CHANNELS {
        let dir = destination.join(channel);
        fsio::create_dir_all(&dir)?;
        channels.insert(
            channel.to_string(),
            json!({ "path": dir.as_str(), "published": true }),
        );
    }

    let summary = PublishSummary {
        version,
        timestamp: fsio::utc_timestamp()?,
        source: source.to_string(),
        channels,
        gpg_key,
    };
    let path = destination.join(PUBLISH_SUMMARY);
    fsio::write_json(&path, &summary)?;
    Ok(path)
}
