use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// A required input path does not exist (or is not the expected kind of entry).
    #[error("{what} not found: {path}")]
    InputNotFound { what: &'static str, path: Utf8PathBuf },

    #[error("I/O error at {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}")]
    Encode {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to format timestamp")]
    Timestamp(#[from] time::error::Format),
}
