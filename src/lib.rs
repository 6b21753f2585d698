//! Spriteforge turns procedural drawing code and hi-res source frames into
//! game-ready pixel-art sprites and sprite strips.
//!
//! # Pipeline overview
//!
//! 1. **Draw or load**: a [`FrameGenerator`] paints frames onto a [`Raster`]
//!    with alpha-composited primitives, or a directory job loads one PNG per
//!    frame.
//! 2. **Resample**: generated frames are scaled with [`Kernel::Nearest`];
//!    loaded frames are resized to the job's frame size with the batch kernel
//!    (Lanczos with radius 3 unless told otherwise).
//! 3. **Compose**: frames become a single image or a horizontal strip.
//! 4. **Write**: the result is saved as RGBA PNG, creating parent folders.
//!
//! A batch runs every selected [`SpriteJob`] of a [`JobTable`] and reports a
//! per-job [`JobOutcome`]. A missing or broken job never stops the others;
//! only configuration errors abort a batch before it starts.
//!
//! Pixels are straight (non-premultiplied) RGBA8 everywhere.
#![forbid(unsafe_code)]

pub mod assets;
pub mod compose;
pub mod foundation;
pub mod pipeline;
pub mod raster;
pub mod resample;
pub mod sprites;

pub use assets::decode::{decode_raster, load_raster};
pub use assets::encode::{encode_png, ensure_parent_dir, save_raster};
pub use compose::sheet::{Frame, Layout, compose, compose_frames};
pub use foundation::color::{DEFAULT_DARKEN, DEFAULT_LIGHTEN, Rgba8};
pub use foundation::core::{PixelBox, Point, px};
pub use foundation::error::{ForgeError, ForgeResult};
pub use pipeline::batch::{
    BatchOptions, BatchReport, BatchThreading, JobOutcome, JobStatus, run_batch, run_job,
};
pub use pipeline::generate::{FrameGenerator, GeneratorRegistry};
pub use pipeline::job::{JobSource, JobTable, SpriteJob};
pub use raster::blend::over;
pub use raster::canvas::Raster;
pub use raster::shapes::Coverage;
pub use resample::kernel::Kernel;
pub use resample::resize::resize;
pub use sprites::catalog::{builtin_registry, downscale_table, generation_table};
