//! Fuzz target for the JSON artifact loaders and `evergreen.toml`.
//!
//! Every loader may reject the input, none may panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_documents
//! ```

#![no_main]

use camino::Utf8Path;
use evergreen_config::{Artifact, ComposeManifest, EnrollmentGreeterSource, SecurityPolicies};
use evergreen_workflow::GitHubWorkflow;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let path = Utf8Path::new("fuzz.json");

    let _ = ComposeManifest::parse(path, text);
    let _ = SecurityPolicies::parse(path, text);
    let _ = EnrollmentGreeterSource::parse(path, text);
    if let Ok(workflow) = GitHubWorkflow::parse(path, text) {
        let _ = workflow.expectation_gaps();
    }

    if let Ok(cfg) = evergreen_settings::parse_config_toml(text) {
        let _ = evergreen_settings::resolve_layout(
            Utf8Path::new("repo"),
            cfg,
            evergreen_settings::Overrides::default(),
        );
    }
});
