pub use kurbo::Point;

/// Inclusive integer bounding box in pixel coordinates.
///
/// `PixelBox::new(0, 0, 9, 9)` covers a 10x10 block of pixels, matching how
/// pixel-art drawing code names boxes by their first and last pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelBox {
    /// Build a box from two corners in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Box anchored at `(x, y)` spanning `w x h` pixels. Returns `None` when empty.
    pub fn from_origin_size(x: i32, y: i32, w: u32, h: u32) -> Option<Self> {
        if w == 0 || h == 0 {
            return None;
        }
        let x1 = x.saturating_add(i32::try_from(w - 1).unwrap_or(i32::MAX));
        let y1 = y.saturating_add(i32::try_from(h - 1).unwrap_or(i32::MAX));
        Some(Self { x0: x, y0: y, x1, y1 })
    }

    /// Column count, saturating at `u32::MAX` for a box spanning every `i32`.
    pub fn width(self) -> u32 {
        u32::try_from(i64::from(self.x1) - i64::from(self.x0) + 1).unwrap_or(u32::MAX)
    }

    pub fn height(self) -> u32 {
        u32::try_from(i64::from(self.y1) - i64::from(self.y0) + 1).unwrap_or(u32::MAX)
    }

    /// Box centered on `(cx, cy)` reaching `r` pixels in every direction,
    /// saturating at the `i32` range.
    pub fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(
            cx.saturating_sub(r),
            cy.saturating_sub(r),
            cx.saturating_add(r),
            cy.saturating_add(r),
        )
    }

    /// Intersection with a `width x height` raster, or `None` if disjoint.
    pub fn clip_to(self, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let max_x = i32::try_from(width - 1).unwrap_or(i32::MAX);
        let max_y = i32::try_from(height - 1).unwrap_or(i32::MAX);
        if self.x1 < 0 || self.y1 < 0 || self.x0 > max_x || self.y0 > max_y {
            return None;
        }
        Some(Self {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(max_x),
            y1: self.y1.min(max_y),
        })
    }
}

/// Pixel-center point helper for integer call sites.
pub fn px(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
