use crate::{
    foundation::error::{ForgeError, ForgeResult},
    raster::canvas::Raster,
    resample::kernel::Kernel,
};

/// Resize `src` to `target_w x target_h` with `kernel`.
///
/// Separable: a horizontal pass into an `f32` intermediate, then a vertical
/// pass back to RGBA8. Destination pixel `d` samples around source position
/// `(d + 0.5) * src / dst`. When shrinking, the filter is stretched by the
/// scale factor so every source pixel contributes (area-aware downscaling);
/// when enlarging it keeps its natural support (2, 4 or `2 * radius` taps).
/// Taps beyond the border are clamped to the edge pixel and weights are
/// normalized to sum to 1, so a constant image stays constant.
///
/// All four channels are filtered independently on straight alpha, so colors
/// next to fully transparent pixels darken toward the transparent pixel's RGB.
pub fn resize(src: &Raster, target_w: u32, target_h: u32, kernel: Kernel) -> ForgeResult<Raster> {
    if target_w == 0 || target_h == 0 {
        return Err(ForgeError::invalid_dimensions(format!(
            "resize target must be positive, got {target_w}x{target_h}"
        )));
    }
    let (src_w, src_h) = src.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(ForgeError::invalid_dimensions(format!(
            "cannot resize an empty {src_w}x{src_h} raster"
        )));
    }
    (target_w as usize)
        .checked_mul(target_h as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ForgeError::invalid_dimensions("resize target size overflow"))?;

    let cols = contributions(src_w, target_w, kernel);
    let rows = contributions(src_h, target_h, kernel);

    let tmp = horizontal_pass(src.as_bytes(), src_w, src_h, &cols);
    let out = vertical_pass(&tmp, target_w, &rows);
    Raster::from_rgba8(target_w, target_h, out)
}

/// Source taps for one destination pixel: weights for `first..first + len`.
#[derive(Clone, Debug, PartialEq)]
struct Contribution {
    first: usize,
    weights: Vec<f32>,
}

fn contributions(src_len: u32, dst_len: u32, kernel: Kernel) -> Vec<Contribution> {
    if kernel == Kernel::Nearest {
        return (0..dst_len)
            .map(|d| Contribution {
                first: (u64::from(d) * u64::from(src_len) / u64::from(dst_len)) as usize,
                weights: vec![1.0],
            })
            .collect();
    }

    let scale = f64::from(src_len) / f64::from(dst_len);
    let filter_scale = scale.max(1.0);
    let support = kernel.support() * filter_scale;
    let last = i64::from(src_len) - 1;

    (0..dst_len)
        .map(|d| {
            let center = (f64::from(d) + 0.5) * scale;
            let lo = (center - support).floor() as i64;
            let hi = (center + support).ceil() as i64;
            let first = lo.clamp(0, last);
            let end = hi.clamp(0, last);

            let mut weights = vec![0.0f64; (end - first + 1) as usize];
            let mut sum = 0.0;
            for i in lo..=hi {
                let w = kernel.weight((i as f64 + 0.5 - center) / filter_scale);
                if w == 0.0 {
                    continue;
                }
                weights[(i.clamp(0, last) - first) as usize] += w;
                sum += w;
            }

            if sum.abs() < f64::EPSILON {
                let nearest = (center.floor() as i64).clamp(0, last);
                weights.iter_mut().for_each(|w| *w = 0.0);
                weights[(nearest - first) as usize] = 1.0;
                sum = 1.0;
            }

            Contribution {
                first: first as usize,
                weights: weights.into_iter().map(|w| (w / sum) as f32).collect(),
            }
        })
        .collect()
}

fn horizontal_pass(src: &[u8], width: u32, height: u32, cols: &[Contribution]) -> Vec<f32> {
    let w = width as usize;
    let dst_w = cols.len();
    let mut dst = vec![0.0f32; dst_w * height as usize * 4];
    for y in 0..height as usize {
        let row = &src[y * w * 4..(y + 1) * w * 4];
        for (x, c) in cols.iter().enumerate() {
            let mut acc = [0.0f32; 4];
            for (k, &kw) in c.weights.iter().enumerate() {
                let idx = (c.first + k) * 4;
                for ch in 0..4 {
                    acc[ch] += kw * f32::from(row[idx + ch]);
                }
            }
            let out_idx = (y * dst_w + x) * 4;
            dst[out_idx..out_idx + 4].copy_from_slice(&acc);
        }
    }
    dst
}

fn vertical_pass(src: &[f32], width: u32, rows: &[Contribution]) -> Vec<u8> {
    let w = width as usize;
    let mut dst = vec![0u8; w * rows.len() * 4];
    for (y, c) in rows.iter().enumerate() {
        for x in 0..w {
            let mut acc = [0.0f32; 4];
            for (k, &kw) in c.weights.iter().enumerate() {
                let idx = ((c.first + k) * w + x) * 4;
                for ch in 0..4 {
                    acc[ch] += kw * src[idx + ch];
                }
            }
            let out_idx = (y * w + x) * 4;
            for ch in 0..4 {
                dst[out_idx + ch] = acc[ch].round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    dst
}

#[cfg(test)]
#[path = "../../tests/unit/resample/resize.rs"]
mod tests;
