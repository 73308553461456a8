use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Failure to load a configuration artifact. Every variant carries the offending path.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("configuration not found: {path}")]
    NotFound { path: Utf8PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or malformed section syntax.
    #[error("failed to parse {path}: {message}")]
    Parse { path: Utf8PathBuf, message: String },

    /// Well-formed input that lacks a required key or has a value of the wrong shape.
    #[error("invalid configuration in {path}: {message}")]
    Schema { path: Utf8PathBuf, message: String },
}

impl ConfigError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            ConfigError::NotFound { path }
            | ConfigError::Io { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Schema { path, .. } => path,
        }
    }

    pub(crate) fn parse(path: &Utf8Path, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn schema(path: &Utf8Path, message: impl Into<String>) -> Self {
        ConfigError::Schema {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
