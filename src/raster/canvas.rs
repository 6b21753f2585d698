use crate::{
    foundation::{
        color::Rgba8,
        core::PixelBox,
        error::{ForgeError, ForgeResult},
    },
    raster::blend::{over, over_in_place},
};

/// Owned straight-alpha RGBA8 pixel buffer.
///
/// Invariant: `data.len() == width * height * 4`, rows top to bottom.
/// Drawing never fails: anything outside the raster is clipped away.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Raster {
    /// Allocate a `width x height` raster with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba8) -> Self {
        let px = fill.to_array();
        let data = px.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgba8::TRANSPARENT)
    }

    /// Wrap an existing RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> ForgeResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ForgeError::invalid_dimensions("raster buffer size overflow"))?;
        if data.len() != expected {
            return Err(ForgeError::invalid_dimensions(format!(
                "rgba8 buffer of {} bytes does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if !self.contains(x, y) {
            return None;
        }
        let i = self.offset(x as u32, y as u32);
        let p = &self.data[i..i + 4];
        Some(Rgba8::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Overwrite a pixel without compositing.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Composite `color` onto `(x, y)` with source-over; opaque colors replace.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba8) {
        if !self.contains(x, y) {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        let p = &mut self.data[i..i + 4];
        let out = over(Rgba8::rgba(p[0], p[1], p[2], p[3]), color);
        p.copy_from_slice(&out.to_array());
    }

    /// Single pixel; same as [`Raster::set_pixel`].
    pub fn point(&mut self, x: i32, y: i32, color: Rgba8) {
        self.set_pixel(x, y, color);
    }

    /// Composite `color` over `[x, x + w) x [y, y + h)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba8) {
        let Some(area) = PixelBox::from_origin_size(x, y, w, h) else {
            return;
        };
        self.fill_box(area, color);
    }

    /// Composite `color` over every pixel of an inclusive box.
    pub fn fill_box(&mut self, area: PixelBox, color: Rgba8) {
        let Some(area) = area.clip_to(self.width, self.height) else {
            return;
        };
        for y in area.y0..=area.y1 {
            let start = self.offset(area.x0 as u32, y as u32);
            let end = self.offset(area.x1 as u32, y as u32) + 4;
            over_in_place(&mut self.data[start..end], color);
        }
    }

    /// Copy `src` into this raster with its top-left corner at `(x, y)`.
    ///
    /// Plain copy: destination pixels, alpha included, are overwritten.
    pub fn paste(&mut self, src: &Raster, x: i32, y: i32) {
        let Some(target) = PixelBox::from_origin_size(x, y, src.width, src.height) else {
            return;
        };
        let Some(visible) = target.clip_to(self.width, self.height) else {
            return;
        };

        let row_bytes = visible.width() as usize * 4;
        for dy in visible.y0..=visible.y1 {
            let sx = (visible.x0 - x) as u32;
            let sy = (dy - y) as u32;
            let s = src.offset(sx, sy);
            let d = self.offset(visible.x0 as u32, dy as u32);
            self.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
