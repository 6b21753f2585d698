use std::str::FromStr;

use crate::{
    foundation::error::{ForgeError, ForgeResult},
    raster::canvas::Raster,
};

/// How composed frames are arranged in the output image.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Exactly one frame, passed through untouched.
    #[default]
    Single,
    /// Frames left to right, frame `i` at `x = i * frame_width`.
    Strip,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "strip" => Ok(Self::Strip),
            other => Err(format!("unknown layout '{other}' (expected single|strip)")),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Strip => "strip",
        })
    }
}

/// One rendered animation pose or static sprite, tagged with its identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub id: String,
    pub raster: Raster,
}

impl Frame {
    pub fn new(id: impl Into<String>, raster: Raster) -> Self {
        Self {
            id: id.into(),
            raster,
        }
    }
}

/// Lay out `frames` into one raster.
///
/// `Single` hands its only frame back without copying. `Strip` requires every
/// frame to share the first frame's size and copies them (no blending) onto a
/// transparent `frame_width * count x frame_height` sheet.
pub fn compose(frames: Vec<Raster>, layout: Layout) -> ForgeResult<Raster> {
    if frames.is_empty() {
        return Err(ForgeError::EmptyFrameSet);
    }

    match layout {
        Layout::Single => {
            if frames.len() != 1 {
                return Err(ForgeError::layout(format!(
                    "single layout takes exactly one frame, got {}",
                    frames.len()
                )));
            }
            Ok(frames.into_iter().next().ok_or(ForgeError::EmptyFrameSet)?)
        }
        Layout::Strip => compose_strip(&frames),
    }
}

fn compose_strip(frames: &[Raster]) -> ForgeResult<Raster> {
    let (fw, fh) = frames[0].dimensions();
    if let Some((i, bad)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.dimensions() != (fw, fh))
    {
        return Err(ForgeError::dimension_mismatch(format!(
            "strip frame {i} is {}x{}, expected {fw}x{fh}",
            bad.width(),
            bad.height()
        )));
    }

    let count = u32::try_from(frames.len())
        .map_err(|_| ForgeError::invalid_dimensions("too many frames for one strip"))?;
    let sheet_w = fw
        .checked_mul(count)
        .ok_or_else(|| ForgeError::invalid_dimensions("strip width overflows u32"))?;
    let x_step = i32::try_from(fw)
        .map_err(|_| ForgeError::invalid_dimensions("frame width exceeds i32"))?;

    let mut sheet = Raster::transparent(sheet_w, fh);
    let mut x = 0i32;
    for frame in frames {
        sheet.paste(frame, x, 0);
        x = x.saturating_add(x_step);
    }
    Ok(sheet)
}

/// [`compose`] over tagged frames, dropping the identifiers.
pub fn compose_frames(frames: Vec<Frame>, layout: Layout) -> ForgeResult<Raster> {
    compose(frames.into_iter().map(|f| f.raster).collect(), layout)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/sheet.rs"]
mod tests;
