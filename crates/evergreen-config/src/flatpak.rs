use crate::artifact::Artifact;
use crate::error::ConfigError;
use camino::Utf8Path;
use evergreen_settings::ArtifactKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const REMOTE_SECTION_PREFIX: &str = "Flatpak Remote ";

/// A single Flatpak remote definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatpakRemote {
    name: String,
    url: String,
    collection_id: String,
    #[serde(default)]
    gpg_key: Option<String>,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
    #[serde(default)]
    default_refs: Vec<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl FlatpakRemote {
    /// An enabled remote with no GPG key and no default refs.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            collection_id: collection_id.into(),
            gpg_key: None,
            enabled: true,
            default_refs: Vec::new(),
        }
    }

    pub fn with_gpg_key(self, gpg_key: impl Into<String>) -> Self {
        Self {
            gpg_key: Some(gpg_key.into()),
            ..self
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn gpg_key(&self) -> Option<&str> {
        self.gpg_key.as_deref()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn default_refs(&self) -> &[String] {
        &self.default_refs
    }
}

/// Parsed Flatpak remotes defaults file, keyed by remote name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatpakRemoteConfig {
    remotes: BTreeMap<String, FlatpakRemote>,
}

impl FlatpakRemoteConfig {
    pub fn remotes(&self) -> &BTreeMap<String, FlatpakRemote> {
        &self.remotes
    }

    pub fn get(&self, name: &str) -> Option<&FlatpakRemote> {
        self.remotes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.remotes.contains_key(name)
    }
}

impl Artifact for FlatpakRemoteConfig {
    const KIND: ArtifactKind = ArtifactKind::FlatpakRemotes;

    fn parse(path: &Utf8Path, text: &str) -> Result<Self, ConfigError> {
        Ok(FlatpakRemoteConfig {
            remotes: parse_remotes(path, text)?,
        })
    }
}

/// In-progress remote; frozen into a [`FlatpakRemote`] when its section ends.
struct RemoteBuilder {
    name: String,
    url: String,
    collection_id: String,
    gpg_key: Option<String>,
    enabled: bool,
}

impl RemoteBuilder {
    fn new(name: String) -> Self {
        Self {
            name,
            url: String::new(),
            collection_id: String::new(),
            gpg_key: None,
            enabled: true,
        }
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key.to_ascii_lowercase().as_str() {
            "url" => self.url = value.to_string(),
            "collectionid" => self.collection_id = value.to_string(),
            "gpgkey" => self.gpg_key = Some(value.to_string()),
            "enabled" => self.enabled = parse_enabled(value),
            _ => {}
        }
    }

    fn freeze(self) -> FlatpakRemote {
        FlatpakRemote {
            name: self.name,
            url: self.url,
            collection_id: self.collection_id,
            gpg_key: self.gpg_key,
            enabled: self.enabled,
            default_refs: Vec::new(),
        }
    }
}

fn parse_enabled(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Parse the INI-like defaults file.
///
/// Only `[Flatpak Remote "<name>"]` sections are tracked; keys of other sections are skipped.
/// A repeated remote name replaces the earlier definition.
fn parse_remotes(
    path: &Utf8Path,
    text: &str,
) -> Result<BTreeMap<String, FlatpakRemote>, ConfigError> {
    let mut remotes = BTreeMap::new();
    let mut current: Option<RemoteBuilder> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') {
            let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
                return Err(ConfigError::parse(
                    path,
                    format!("line {}: unterminated section header `{line}`", idx + 1),
                ));
            };
            if let Some(done) = current.take() {
                remotes.insert(done.name.clone(), done.freeze());
            }
            current = remote_section_name(section)
                .map_err(|msg| ConfigError::parse(path, format!("line {}: {msg}", idx + 1)))?
                .map(RemoteBuilder::new);
            continue;
        }

        let Some(remote) = current.as_mut() else {
            continue;
        };
        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        remote.apply(key.trim(), value.trim());
    }

    if let Some(done) = current.take() {
        remotes.insert(done.name.clone(), done.freeze());
    }

    Ok(remotes)
}

/// `Some(name)` for a remote section, `None` for any other section.
fn remote_section_name(section: &str) -> Result<Option<String>, String> {
    let section = section.trim();
    let rest = match section.strip_prefix(REMOTE_SECTION_PREFIX) {
        Some(rest) => rest,
        // `[Flatpak Remote ]` trims down to the bare prefix.
        None if section == REMOTE_SECTION_PREFIX.trim_end() => "",
        None => return Ok(None),
    };
    let name = rest
        .trim()
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .ok_or_else(|| format!("remote section needs a quoted name: `[{section}]`"))?;
    if name.is_empty() {
        return Err(format!("remote section has an empty name: `[{section}]`"));
    }
    Ok(Some(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{utf8_root, write_file};
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn parse(text: &str) -> Result<FlatpakRemoteConfig, ConfigError> {
        FlatpakRemoteConfig::parse(Utf8Path::new("flatpak-remotes.conf"), text)
    }

    #[test]
    fn parses_single_remote_fixture() {
        let tmp = TempDir::new().expect("temp dir");
        let path = utf8_root(&tmp).join("flatpak-remotes.conf");
        write_file(
            &path,
            r#"[Flatpak Remote "example"]
Url=https://example.test/repo
CollectionID=com.example.Stable
GPGKey=example-key
Enabled=false"#,
        );

        let parsed = FlatpakRemoteConfig::load(Some(&path)).expect("load fixture");
        let remote = parsed.get("example").expect("example remote");
        assert_eq!(remote.name(), "example");
        assert_eq!(remote.url(), "https://example.test/repo");
        assert_eq!(remote.collection_id(), "com.example.Stable");
        assert_eq!(remote.gpg_key(), Some("example-key"));
        assert!(!remote.enabled());
        assert!(remote.default_refs().is_empty());
    }

    #[test]
    fn canonical_defaults_define_flathub_and_evergreen() {
        let parsed = FlatpakRemoteConfig::load(None).expect("load canonical defaults");

        let names: Vec<&str> = parsed.remotes().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["evergreen", "flathub"]);
        assert!(parsed.get("flathub").expect("flathub").enabled());
        assert!(
            parsed
                .get("evergreen")
                .expect("evergreen")
                .url()
                .starts_with("https://apps.evergreen-os.dev")
        );
    }

    #[test]
    fn section_defaults_apply_when_keys_absent() {
        let parsed = parse("[Flatpak Remote \"bare\"]\n").expect("parse");
        assert_eq!(parsed.get("bare"), Some(&FlatpakRemote::new("bare", "", "")));
    }

    #[test]
    fn keys_are_case_insensitive_and_enabled_accepts_variants() {
        let parsed = parse(
            r#"
[Flatpak Remote "a"]
URL = https://a.test
collectionid = org.a
Enabled = YES

[Flatpak Remote "b"]
enabled=1

[Flatpak Remote "c"]
ENABLED=on
"#,
        )
        .expect("parse");

        let a = parsed.get("a").expect("a");
        assert_eq!(a.url(), "https://a.test");
        assert_eq!(a.collection_id(), "org.a");
        assert!(a.enabled());
        assert!(parsed.get("b").expect("b").enabled());
        assert!(!parsed.get("c").expect("c").enabled());
    }

    #[test]
    fn unrecognized_sections_are_skipped() {
        let parsed = parse(
            r#"
[Core]
Url=https://ignored.test

[Flatpak Remote "kept"]
Url=https://kept.test

[Other "thing"]
Url=https://also-ignored.test
"#,
        )
        .expect("parse");

        assert_eq!(parsed.remotes().len(), 1);
        assert_eq!(parsed.get("kept").expect("kept").url(), "https://kept.test");
    }

    #[test]
    fn repeated_section_last_wins() {
        let parsed = parse(
            r#"
[Flatpak Remote "dup"]
Url=https://first.test
GPGKey=first

[Flatpak Remote "dup"]
Url=https://second.test
"#,
        )
        .expect("parse");

        let dup = parsed.get("dup").expect("dup");
        assert_eq!(dup.url(), "https://second.test");
        assert_eq!(dup.gpg_key(), None);
    }

    #[test]
    fn comments_and_keys_before_any_section_are_ignored() {
        let parsed = parse(
            "# defaults\nUrl=https://orphan.test\n; note\n[Flatpak Remote \"x\"]\n# Url=https://commented.test\n",
        )
        .expect("parse");
        assert_eq!(parsed.get("x").expect("x").url(), "");
    }

    #[test]
    fn malformed_section_headers_are_parse_errors() {
        for text in [
            "[Flatpak Remote \"open\"\nUrl=x\n",
            "[Flatpak Remote unquoted]\n",
            "[Flatpak Remote \"\"]\n",
            "[Flatpak Remote ]\nUrl=https://x\n",
            "[Flatpak Remote]\n",
        ] {
            let err = parse(text).expect_err("malformed header");
            assert!(
                matches!(err, ConfigError::Parse { .. }),
                "expected parse error for {text:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn builder_style_constructors_do_not_alias() {
        let base = FlatpakRemote::new("r", "https://r.test", "org.r");
        let disabled = base.clone().with_enabled(false).with_gpg_key("k");
        assert!(base.enabled());
        assert_eq!(base.gpg_key(), None);
        assert!(!disabled.enabled());
        assert_eq!(disabled.gpg_key(), Some("k"));
    }

    proptest! {
        #[test]
        fn parser_never_panics(input in ".*") {
            let _ = parse(&input);
        }

        #[test]
        fn enabled_is_true_only_for_known_truthy_values(value in "[A-Za-z0-9]{0,6}") {
            let parsed = parse(&format!("[Flatpak Remote \"p\"]\nEnabled={value}\n")).expect("parse");
            let expected = matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
            prop_assert_eq!(parsed.get("p").expect("p").enabled(), expected);
        }
    }
}
