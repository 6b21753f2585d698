use std::path::Path;

use crate::{
    foundation::error::{ForgeError, ForgeResult},
    raster::canvas::Raster,
};

/// Decode encoded image bytes (any format `image` reads) into straight RGBA8.
pub fn decode_raster(bytes: &[u8]) -> ForgeResult<Raster> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ForgeError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_rgba8(width, height, rgba.into_raw())
}

/// Read and decode the image at `path`.
///
/// A missing file is [`ForgeError::FrameMissing`] so callers can skip it;
/// unreadable or undecodable files are [`ForgeError::Decode`].
pub fn load_raster(path: &Path) -> ForgeResult<Raster> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ForgeError::frame_missing(format!(
                "'{}' not found",
                path.display()
            )));
        }
        Err(e) => {
            return Err(ForgeError::decode(format!(
                "read '{}': {e}",
                path.display()
            )));
        }
    };
    decode_raster(&bytes).map_err(|e| match e {
        ForgeError::Decode(msg) => ForgeError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
