//! Built-in procedural art and the job tables that ship with the tool.

pub mod catalog;
pub mod characters;
pub mod effects;
pub mod projectiles;

use crate::{compose::sheet::Frame, foundation::color::Rgba8, raster::canvas::Raster};

/// Wood for handles, fuses and wands.
pub(crate) const BROWN: Rgba8 = Rgba8::rgb(0x8b, 0x45, 0x13);

/// Wrap a static sprite as its only frame, `default`.
pub(crate) fn single(raster: Raster) -> Vec<Frame> {
    vec![Frame::new("default", raster)]
}

#[cfg(test)]
#[path = "../tests/unit/sprites/generators.rs"]
mod tests;
