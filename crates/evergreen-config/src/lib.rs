//! Configuration loaders: read EvergreenOS build-time artifacts into immutable records.
//!
//! Every loader follows the same contract:
//! - an explicit path wins; otherwise the artifact's location in the [`RepoLayout`] is used
//! - absent optional keys default to empty collections, `None`, or `false`
//! - a missing file, malformed text, and a missing required key are distinct [`ConfigError`]s

#![forbid(unsafe_code)]

mod artifact;
mod error;
mod flatpak;
mod greeter;
pub mod json;
mod manifest;
mod security;

pub use artifact::{Artifact, read_text};
pub use error::ConfigError;
pub use evergreen_settings::{ArtifactKind, RepoLayout};
pub use flatpak::{FlatpakRemote, FlatpakRemoteConfig};
pub use greeter::EnrollmentGreeterSource;
pub use manifest::{BaseImage, ComposeManifest};
pub use security::SecurityPolicies;
