use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{ForgeError, ForgeResult},
    raster::canvas::Raster,
};

/// Create `path`'s parent directory if it has one.
pub fn ensure_parent_dir(path: &Path) -> ForgeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))
            .map_err(|e| ForgeError::write(format!("{e:#}")))?;
    }
    Ok(())
}

/// Write `raster` as an RGBA PNG, creating parent directories as needed.
pub fn save_raster(raster: &Raster, path: &Path) -> ForgeResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        raster.as_bytes(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ForgeError::write(format!("write png '{}': {e}", path.display())))
}

/// Encode `raster` as PNG bytes in memory.
pub fn encode_png(raster: &Raster) -> ForgeResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut buf),
        raster.as_bytes(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ForgeError::write(format!("encode png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
