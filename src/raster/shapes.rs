//! Pixel-exact shape rasterization.
//!
//! Coordinates name pixel centers: the point `(3, 4)` is the pixel in column
//! 3, row 4. Fractional points are rounded to the nearest pixel for lines and
//! sampled exactly for polygon interiors. Nothing is anti-aliased.
//!
//! Every shape first collects a [`Coverage`] mask and then composites each
//! covered pixel exactly once, so translucent strokes never double-blend
//! where they overlap themselves.

use crate::{
    foundation::{
        color::Rgba8,
        core::{PixelBox, Point},
    },
    raster::canvas::Raster,
};

/// Set of pixels touched by a shape, clipped to the target raster.
#[derive(Clone, Debug)]
pub struct Coverage {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Coverage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Mark a pixel; out-of-bounds pixels are ignored.
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.bits[i] = true;
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.bits[i])
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Drop every pixel that `other` covers.
    pub fn subtract(&mut self, other: &Coverage) {
        for (a, &b) in self.bits.iter_mut().zip(&other.bits) {
            *a &= !b;
        }
    }

    /// Keep only the covered pixels for which `keep` holds.
    pub fn retain(&mut self, keep: impl Fn(i32, i32) -> bool) {
        let w = self.width as usize;
        for (i, bit) in self.bits.iter_mut().enumerate() {
            if *bit && !keep((i % w) as i32, (i / w) as i32) {
                *bit = false;
            }
        }
    }

    /// Composite `color` onto each covered pixel, row-major.
    pub fn apply(&self, raster: &mut Raster, color: Rgba8) {
        let w = self.width as usize;
        for (i, _) in self.bits.iter().enumerate().filter(|(_, b)| **b) {
            raster.set_pixel((i % w) as i32, (i / w) as i32, color);
        }
    }

    /// Bresenham walk from `p0` to `p1` (endpoints rounded to pixels).
    ///
    /// Widths above one stamp a perpendicular run of `width` pixels at each
    /// step: vertical runs for x-major lines, horizontal runs for y-major
    /// lines. Odd widths are centered; for even widths the extra pixel goes
    /// to the positive side (down or right).
    ///
    /// Only the steps whose major coordinate lands on the raster are visited,
    /// and each run is clamped to the raster, so the work is bounded by the
    /// raster size however long or wide the line is.
    pub fn mark_line(&mut self, p0: Point, p1: Point, width: u32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (x0, y0) = (i64::from(round_px(p0.x)), i64::from(round_px(p0.y)));
        let (x1, y1) = (i64::from(round_px(p1.x)), i64::from(round_px(p1.y)));

        let (adx, ady) = ((x1 - x0).abs(), (y1 - y0).abs());
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let x_major = adx >= ady;

        let w = i64::from(width.max(1));
        let (lo, hi) = (-(w - 1) / 2, w / 2);

        let (w_ext, h_ext) = (i64::from(self.width), i64::from(self.height));
        let (major, minor) = if x_major {
            (Axis::new(x0, sx, adx, w_ext), Axis::new(y0, sy, ady, h_ext))
        } else {
            (Axis::new(y0, sy, ady, h_ext), Axis::new(x0, sx, adx, w_ext))
        };

        let Some((k_lo, k_hi)) = major.visible_steps() else {
            return;
        };
        for k in k_lo..=k_hi {
            let along = major.start + k * major.step;
            let across = minor.start + minor_advance(k, major.len, minor.len) * minor.step;
            let from = across.saturating_add(lo).max(0);
            let to = across.saturating_add(hi).min(minor.extent - 1);
            for m in from..=to {
                if x_major {
                    self.mark(along as i32, m as i32);
                } else {
                    self.mark(m as i32, along as i32);
                }
            }
        }
    }

    /// Closed outline through `points`, one pixel wide.
    pub fn mark_closed_path(&mut self, points: &[Point]) {
        match points {
            [] => {}
            [p] => self.mark_line(*p, *p, 1),
            _ => {
                for (i, &a) in points.iter().enumerate() {
                    let b = points[(i + 1) % points.len()];
                    self.mark_line(a, b, 1);
                }
            }
        }
    }

    /// Even-odd scanline interior of the closed polygon through `points`.
    ///
    /// Each pixel row `y` is intersected with every non-horizontal edge that
    /// spans `[y_min, y_max)`; pixels whose center lies between an entering
    /// and a leaving crossing (both inclusive) are covered.
    pub fn mark_polygon_interior(&mut self, points: &[Point]) {
        if points.len() < 3 || self.height == 0 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }
        let first_row = min_y.ceil().max(0.0) as i32;
        let last_row = max_y.floor().min(f64::from(self.height - 1)) as i32;

        let mut crossings = Vec::with_capacity(points.len());
        for row in first_row..=last_row {
            let yc = f64::from(row);
            crossings.clear();
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if a.y == b.y {
                    continue;
                }
                let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
                if yc < top.y || yc >= bottom.y {
                    continue;
                }
                let t = (yc - top.y) / (bottom.y - top.y);
                crossings.push(top.x + t * (bottom.x - top.x));
            }
            crossings.sort_by(f64::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 1e-9).ceil();
                let end = (pair[1] + 1e-9).floor();
                if start > end {
                    continue;
                }
                let start = start.max(0.0) as i32;
                let end = end.min(f64::from(self.width) - 1.0) as i32;
                for x in start..=end {
                    self.mark(x, row);
                }
            }
        }
    }

    /// Pixels whose center lies inside the ellipse inscribed in `bbox`.
    pub fn mark_ellipse(&mut self, bbox: PixelBox) {
        let shape = EllipseTest::new(bbox);
        self.mark_where(bbox, |x, y| shape.inside(x, y));
    }

    /// Inside pixels of the ellipse with at least one 4-neighbor outside it.
    pub fn mark_ellipse_outline(&mut self, bbox: PixelBox) {
        let shape = EllipseTest::new(bbox);
        self.mark_where(bbox, |x, y| shape.on_boundary(x, y));
    }

    /// Every pixel of `bbox`.
    pub fn mark_box(&mut self, bbox: PixelBox) {
        self.mark_where(bbox, |_, _| true);
    }

    /// The one-pixel frame of `bbox`.
    pub fn mark_box_outline(&mut self, bbox: PixelBox) {
        self.mark_where(bbox, |x, y| {
            x == bbox.x0 || x == bbox.x1 || y == bbox.y0 || y == bbox.y1
        });
    }

    fn mark_where(&mut self, bbox: PixelBox, pred: impl Fn(i32, i32) -> bool) {
        let Some(area) = bbox.clip_to(self.width, self.height) else {
            return;
        };
        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                if pred(x, y) {
                    self.mark(x, y);
                }
            }
        }
    }
}

/// Implicit test `((x - cx) / rx)^2 + ((y - cy) / ry)^2 <= 1` on pixel centers.
struct EllipseTest {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl EllipseTest {
    fn new(b: PixelBox) -> Self {
        Self {
            cx: (f64::from(b.x0) + f64::from(b.x1)) / 2.0,
            cy: (f64::from(b.y0) + f64::from(b.y1)) / 2.0,
            rx: f64::from(b.width()) / 2.0,
            ry: f64::from(b.height()) / 2.0,
        }
    }

    fn inside(&self, x: i32, y: i32) -> bool {
        let nx = (f64::from(x) - self.cx) / self.rx;
        let ny = (f64::from(y) - self.cy) / self.ry;
        nx * nx + ny * ny <= 1.0
    }

    fn on_boundary(&self, x: i32, y: i32) -> bool {
        self.inside(x, y)
            && [(1, 0), (-1, 0), (0, 1), (0, -1)]
                .iter()
                .any(|&(dx, dy)| !self.inside(x + dx, y + dy))
    }
}

/// One axis of a Bresenham walk: where it starts, which way it steps, how
/// many pixels it travels and how many pixels the raster has along it.
struct Axis {
    start: i64,
    step: i64,
    len: i64,
    extent: i64,
}

impl Axis {
    fn new(start: i64, step: i64, len: i64, extent: i64) -> Self {
        Self {
            start,
            step,
            len,
            extent,
        }
    }

    /// Steps `k` in `0..=len` whose coordinate `start + k * step` lies in
    /// `0..extent`.
    fn visible_steps(&self) -> Option<(i64, i64)> {
        let (lo, hi) = if self.step > 0 {
            (-self.start, self.extent - 1 - self.start)
        } else {
            (self.start - (self.extent - 1), self.start)
        };
        let (lo, hi) = (lo.max(0), hi.min(self.len));
        (lo <= hi).then_some((lo, hi))
    }
}

/// Minor-axis moves made before major step `k`: the incremental error term
/// solved in closed form.
fn minor_advance(k: i64, major_len: i64, minor_len: i64) -> i64 {
    if major_len == 0 {
        return 0;
    }
    let num = 2 * i128::from(k) * i128::from(minor_len) + i128::from(major_len);
    num.div_euclid(2 * i128::from(major_len)) as i64
}

fn round_px(v: f64) -> i32 {
    if v.is_finite() {
        v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    } else {
        0
    }
}

impl Raster {
    fn coverage(&self) -> Coverage {
        Coverage::new(self.width(), self.height())
    }

    fn paint(
        &mut self,
        mut fill: Coverage,
        fill_color: Option<Rgba8>,
        outline: Option<(Coverage, Rgba8)>,
    ) {
        if let Some((edge, _)) = &outline {
            fill.subtract(edge);
        }
        if let Some(color) = fill_color {
            fill.apply(self, color);
        }
        if let Some((edge, color)) = outline {
            edge.apply(self, color);
        }
    }

    /// Straight line from `p0` to `p1`; see [`Coverage::mark_line`] for how
    /// widths above one are thickened.
    pub fn line(&mut self, p0: Point, p1: Point, color: Rgba8, width: u32) {
        let mut cov = self.coverage();
        cov.mark_line(p0, p1, width);
        cov.apply(self, color);
    }

    /// Connected line segments through `points` (not closed).
    pub fn polyline(&mut self, points: &[Point], color: Rgba8, width: u32) {
        let mut cov = self.coverage();
        for pair in points.windows(2) {
            cov.mark_line(pair[0], pair[1], width);
        }
        if let [p] = points {
            cov.mark_line(*p, *p, width);
        }
        cov.apply(self, color);
    }

    /// Axis-aligned box with optional fill and one-pixel outline.
    pub fn rectangle(&mut self, bbox: PixelBox, fill: Option<Rgba8>, outline: Option<Rgba8>) {
        let mut body = self.coverage();
        body.mark_box(bbox);
        let edge = outline.map(|c| {
            let mut e = self.coverage();
            e.mark_box_outline(bbox);
            (e, c)
        });
        self.paint(body, fill, edge);
    }

    /// Ellipse inscribed in `bbox`; the outline is painted after the fill
    /// and the fill skips the outline pixels.
    pub fn ellipse(&mut self, bbox: PixelBox, fill: Option<Rgba8>, outline: Option<Rgba8>) {
        let mut body = self.coverage();
        if fill.is_some() {
            body.mark_ellipse(bbox);
        }
        let edge = outline.map(|c| {
            let mut e = self.coverage();
            e.mark_ellipse_outline(bbox);
            (e, c)
        });
        self.paint(body, fill, edge);
    }

    /// Closed polygon (last point joins the first). The fill covers the
    /// even-odd interior plus the edge pixels; the outline, when given,
    /// replaces the fill along the edges.
    pub fn polygon(&mut self, points: &[Point], fill: Option<Rgba8>, outline: Option<Rgba8>) {
        let mut body = self.coverage();
        if fill.is_some() {
            body.mark_polygon_interior(points);
            body.mark_closed_path(points);
        }
        let edge = outline.map(|c| {
            let mut e = self.coverage();
            e.mark_closed_path(points);
            (e, c)
        });
        self.paint(body, fill, edge);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
