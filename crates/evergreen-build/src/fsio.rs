use crate::error::BuildError;
use camino::Utf8Path;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

pub(crate) fn require_file(what: &'static str, path: &Utf8Path) -> Result<(), BuildError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(BuildError::InputNotFound {
            what,
            path: path.to_path_buf(),
        })
    }
}

pub(crate) fn require_exists(what: &'static str, path: &Utf8Path) -> Result<(), BuildError> {
    if path.exists() {
        Ok(())
    } else {
        Err(BuildError::InputNotFound {
            what,
            path: path.to_path_buf(),
        })
    }
}

pub(crate) fn create_dir_all(path: &Utf8Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_bytes(path: &Utf8Path) -> Result<Vec<u8>, BuildError> {
    std::fs::read(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_text(path: &Utf8Path, contents: &str) -> Result<(), BuildError> {
    std::fs::write(path, contents).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path, "wrote build artifact");
    Ok(())
}

pub(crate) fn write_json<T: Serialize>(path: &Utf8Path, value: &T) -> Result<(), BuildError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| BuildError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    write_text(path, &text)
}

/// Current UTC time as RFC 3339 (`2024-01-01T00:00:00Z`).
pub(crate) fn utc_timestamp() -> Result<String, BuildError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
