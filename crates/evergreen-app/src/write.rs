use anyhow::Context;
use camino::Utf8Path;

/// Write `bytes` to `path`, creating parent directories as needed.
pub fn write_text_file(path: &Utf8Path, bytes: impl AsRef<[u8]>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write file: {}", path))?;
    Ok(())
}
