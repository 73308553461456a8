use crate::error::ConfigError;
use camino::{Utf8Path, Utf8PathBuf};
use evergreen_settings::{ArtifactKind, RepoLayout};
use tracing::debug;

/// A configuration artifact that can be read from a repository.
pub trait Artifact: Sized {
    const KIND: ArtifactKind;

    /// Parse already-read text. `path` is only used for error context.
    fn parse(path: &Utf8Path, text: &str) -> Result<Self, ConfigError>;

    /// Load from `path`, or from the artifact's default location in the canonical repository.
    fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        Self::load_in(&RepoLayout::canonical(), path)
    }

    /// Load from `path`, or from the artifact's location in `layout`.
    fn load_in(layout: &RepoLayout, path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let resolved: Utf8PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => layout.path_for(Self::KIND),
        };
        let text = read_text(&resolved)?;
        debug!(artifact = Self::KIND.label(), path = %resolved, "loaded configuration artifact");
        Self::parse(&resolved, &text)
    }
}

/// Read a UTF-8 file, mapping a missing file to [`ConfigError::NotFound`] and non-UTF-8
/// content to [`ConfigError::Parse`].
pub fn read_text(path: &Utf8Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::InvalidData => ConfigError::parse(path, source.to_string()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
