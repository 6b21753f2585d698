use crate::foundation::color::Rgba8;

/// Straight-alpha source-over: `src` painted on top of `dst`.
///
/// An opaque source replaces the destination outright and a fully transparent
/// source leaves it untouched. Otherwise the result alpha is
/// `sa + da * (1 - sa)` and each color channel is the alpha-weighted mix of
/// both colors divided back out by that alpha, so painting onto a fully
/// transparent pixel keeps the source color instead of darkening it. Over an
/// opaque destination this reduces to `src * sa + dst * (1 - sa)`.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src.a == 255 {
        return src;
    }
    if src.a == 0 {
        return dst;
    }

    let sa = f32::from(src.a) / 255.0;
    let da = f32::from(dst.a) / 255.0;
    let dst_weight = da * (1.0 - sa);
    let out_a = sa + dst_weight;

    let mix = |s: u8, d: u8| {
        let v = (f32::from(s) * sa + f32::from(d) * dst_weight) / out_a;
        unit_to_u8(v)
    };

    Rgba8 {
        r: mix(src.r, dst.r),
        g: mix(src.g, dst.g),
        b: mix(src.b, dst.b),
        a: unit_to_u8(out_a * 255.0),
    }
}

/// Composite `src` over every pixel of an RGBA8 byte slice.
pub fn over_in_place(dst: &mut [u8], src: Rgba8) {
    for px in dst.chunks_exact_mut(4) {
        let out = over(Rgba8::rgba(px[0], px[1], px[2], px[3]), src);
        px.copy_from_slice(&out.to_array());
    }
}

fn unit_to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;
