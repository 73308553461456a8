//! Build step use cases: thin wrappers that add error context around `evergreen-build`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

/// One placeholder pipeline step and its arguments.
#[derive(Clone, Debug)]
pub enum BuildStep<'a> {
    Compose {
        manifest: &'a Utf8Path,
        output: &'a Utf8Path,
    },
    CreateIso {
        kickstart: &'a Utf8Path,
        output: &'a Utf8Path,
    },
    CreateQemuImage {
        ostree: &'a Utf8Path,
        output: &'a Utf8Path,
    },
    QemuSmoke {
        image: &'a Utf8Path,
        enroll_url: &'a str,
        output: Option<&'a Utf8Path>,
    },
    PublishOstree {
        source: &'a Utf8Path,
        destination: &'a Utf8Path,
        version: &'a str,
        gpg_key: Option<&'a str>,
    },
}

impl BuildStep<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            BuildStep::Compose { .. } => "compose",
            BuildStep::CreateIso { .. } => "create-iso",
            BuildStep::CreateQemuImage { .. } => "create-qemu-image",
            BuildStep::QemuSmoke { .. } => "qemu-smoke",
            BuildStep::PublishOstree { .. } => "publish-ostree",
        }
    }
}

/// Run a step and return the path of the artifact it wrote.
pub fn run_build_step(step: BuildStep<'_>) -> anyhow::Result<Utf8PathBuf> {
    let name = step.name();
    let artifact = match step {
        BuildStep::Compose { manifest, output } => evergreen_build::compose(manifest, output),
        BuildStep::CreateIso { kickstart, output } => evergreen_build::create_iso(kickstart, output),
        BuildStep::CreateQemuImage { ostree, output } => {
            evergreen_build::create_qemu_image(ostree, output)
        }
        BuildStep::QemuSmoke {
            image,
            enroll_url,
            output,
        } => evergreen_build::run_smoke_test(image, enroll_url, output),
        BuildStep::PublishOstree {
            source,
            destination,
            version,
            gpg_key,
        } => evergreen_build::publish(source, destination, version, gpg_key),
    };
    artifact.with_context(|| format!("{name} failed"))
}
