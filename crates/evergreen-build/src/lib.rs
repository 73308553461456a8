//! Stand-ins for the EvergreenOS image pipeline.
//!
//! Each step validates its input, writes a small placeholder artifact, and
//! returns the artifact's path. None of them invoke real build tooling.

#![forbid(unsafe_code)]

mod compose;
mod error;
mod fsio;
mod image;
mod publish;
mod smoke;

pub use compose::{COMPOSE_RESULT, ComposeResult, compose};
pub use error::BuildError;
pub use image::{ISO_NAME, QEMU_IMAGE_NAME, create_iso, create_qemu_image};
pub use publish::{CHANNELS, PUBLISH_SUMMARY, publish};
pub use smoke::{SMOKE_RESULT, SmokeResult, run_smoke_test};
