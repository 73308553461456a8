//! Fuzz target for the Flatpak remote defaults parser.
//!
//! Goal: The parser should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_flatpak_remotes
//! ```

#![no_main]

use camino::Utf8Path;
use evergreen_config::{Artifact, FlatpakRemoteConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = FlatpakRemoteConfig::parse(Utf8Path::new("flatpak-remotes.conf"), text);
    }
});
