use crate::error::BuildError;
use crate::fsio;
use camino::{Utf8Path, Utf8PathBuf};

pub const ISO_NAME: &str = "EvergreenOS.iso";
pub const QEMU_IMAGE_NAME: &str = "evergreenos.qcow2";

/// Write a text placeholder standing in for the installer ISO.
pub fn create_iso(kickstart: &Utf8Path, output: &Utf8Path) -> Result<Utf8PathBuf, BuildError> {
    fsio::require_file("kickstart", kickstart)?;
    fsio::create_dir_all(output)?;

    let generated = fsio::utc_timestamp()?;
    let iso = output.join(ISO_NAME);
    fsio::write_text(
        &iso,
        &format!("EvergreenOS ISO placeholder\nKickstart: {kickstart}\nGenerated: {generated}\n"),
    )?;
    Ok(iso)
}

/// Write a text placeholder standing in for the QEMU test image. `ostree` may be a file or directory.
pub fn create_qemu_image(ostree: &Utf8Path, output: &Utf8Path) -> Result<Utf8PathBuf, BuildError> {
    fsio::require_exists("OSTree source", ostree)?;
    fsio::create_dir_all(output)?;

    let generated = fsio::utc_timestamp()?;
    let image = output.join(QEMU_IMAGE_NAME);
    fsio::write_text(
        &image,
        &format!(
            "EvergreenOS QEMU image placeholder\nOSTree source: {ostree}\nGenerated: {generated}\n"
        ),
    )?;
    Ok(image)
}
