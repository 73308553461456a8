//! Config parsing and repository layout resolution.
//!
//! This crate is intentionally IO-free: it parses configuration provided as strings and
//! resolves where each configuration artifact lives relative to a repository root.

#![forbid(unsafe_code)]

mod layout;
mod model;
mod resolve;

pub use layout::{ArtifactKind, RepoLayout};
pub use model::{EvergreenConfigV1, PathsConfig, SCHEMA_CONFIG_V1};
pub use resolve::Overrides;

/// Parse `evergreen.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<EvergreenConfigV1> {
    let cfg: EvergreenConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the layout used by the loaders (defaults + config file + overrides).
pub fn resolve_layout(
    root: &camino::Utf8Path,
    cfg: EvergreenConfigV1,
    overrides: Overrides,
) -> anyhow::Result<RepoLayout> {
    resolve::resolve_layout(root, cfg, overrides)
}
