use super::*;
use crate::foundation::color::Rgba8;

const ALL: [Kernel; 4] = [
    Kernel::Nearest,
    Kernel::Bilinear,
    Kernel::Bicubic,
    Kernel::lanczos3(),
];

fn from_pixels(width: u32, height: u32, px: &[Rgba8]) -> Raster {
    let data = px.iter().flat_map(|c| c.to_array()).collect();
    Raster::from_rgba8(width, height, data).unwrap()
}

#[test]
fn nearest_integer_upscale_replicates_blocks() {
    let red = Rgba8::rgb(255, 0, 0);
    let blue = Rgba8::rgb(0, 0, 255);
    let src = from_pixels(2, 2, &[red, red, blue, blue]);
    let out = resize(&src, 8, 8, Kernel::Nearest).unwrap();
    assert_eq!(out.dimensions(), (8, 8));
    for y in 0..8 {
        for x in 0..8 {
            let want = if y < 4 { red } else { blue };
            assert_eq!(out.get_pixel(x, y), Some(want), "({x}, {y})");
        }
    }
}

#[test]
fn nearest_blocks_match_source_pixels() {
    let px: Vec<Rgba8> = (0..6u8)
        .map(|i| Rgba8::rgba(i * 40, 255 - i * 40, i, 100 + i))
        .collect();
    let src = from_pixels(3, 2, &px);
    let k = 5;
    let out = resize(&src, 3 * k, 2 * k, Kernel::Nearest).unwrap();
    for y in 0..(2 * k) as i32 {
        for x in 0..(3 * k) as i32 {
            assert_eq!(out.get_pixel(x, y), src.get_pixel(x / k as i32, y / k as i32));
        }
    }
}

#[test]
fn nearest_downscale_takes_floor_position() {
    let px: Vec<Rgba8> = (0..4u8).map(|i| Rgba8::rgb(i, i, i)).collect();
    let src = from_pixels(4, 1, &px);
    let out = resize(&src, 2, 1, Kernel::Nearest).unwrap();
    assert_eq!(out.get_pixel(0, 0), Some(px[0]));
    assert_eq!(out.get_pixel(1, 0), Some(px[2]));
}

#[test]
fn zero_targets_are_rejected() {
    let src = Raster::transparent(4, 4);
    for (w, h) in [(0, 4), (4, 0), (0, 0)] {
        assert!(matches!(
            resize(&src, w, h, Kernel::default()),
            Err(ForgeError::InvalidDimensions(_))
        ));
    }
    assert!(resize(&Raster::transparent(0, 3), 2, 2, Kernel::Bilinear).is_err());
}

#[test]
fn constant_images_stay_constant() {
    let color = Rgba8::rgba(200, 37, 90, 180);
    let cases = [
        (37, 23, 5, 7),
        (64, 64, 24, 24),
        (10, 10, 3, 3),
        (9, 4, 2, 3),
        (3, 3, 11, 7),
    ];
    for (sw, sh, tw, th) in cases {
        let src = Raster::new(sw, sh, color);
        for kernel in ALL {
            let out = resize(&src, tw, th, kernel).unwrap();
            assert_eq!(out.dimensions(), (tw, th));
            assert!(
                out.as_bytes().chunks_exact(4).all(|p| p == color.to_array()),
                "{kernel} {sw}x{sh} -> {tw}x{th}"
            );
        }
    }
}

#[test]
fn same_size_resize_is_identity() {
    let px: Vec<Rgba8> = (0..20u32)
        .map(|i| {
            Rgba8::rgba(
                (i * 12) as u8,
                (255 - i * 7) as u8,
                (i * 31 % 251) as u8,
                (255 - i) as u8,
            )
        })
        .collect();
    let src = from_pixels(5, 4, &px);
    for kernel in ALL {
        assert_eq!(resize(&src, 5, 4, kernel).unwrap(), src, "{kernel}");
    }
}

#[test]
fn downscale_then_upscale_is_lossy() {
    let mut px = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            px.push(if (x + y) % 2 == 0 { Rgba8::WHITE } else { Rgba8::BLACK });
        }
    }
    let src = from_pixels(8, 8, &px);
    for kernel in [Kernel::Bilinear, Kernel::Bicubic, Kernel::lanczos3()] {
        let small = resize(&src, 4, 4, kernel).unwrap();
        let back = resize(&small, 8, 8, kernel).unwrap();
        assert_ne!(back, src, "{kernel}");
    }
}

#[test]
fn straight_alpha_fringes_toward_transparent_rgb() {
    let src = from_pixels(2, 1, &[Rgba8::rgb(255, 0, 0), Rgba8::TRANSPARENT]);
    let out = resize(&src, 4, 1, Kernel::Bilinear).unwrap();
    assert_eq!(
        out.as_bytes(),
        &[255, 0, 0, 255, 191, 0, 0, 191, 64, 0, 0, 64, 0, 0, 0, 0]
    );
}

#[test]
fn non_uniform_scale_is_supported() {
    let src = Raster::new(10, 4, Rgba8::WHITE);
    let out = resize(&src, 3, 9, Kernel::Bicubic).unwrap();
    assert_eq!(out.dimensions(), (3, 9));
}

#[test]
fn bicubic_overshoot_is_clamped_to_channel_range() {
    let px = [Rgba8::BLACK, Rgba8::BLACK, Rgba8::WHITE, Rgba8::WHITE];
    let src = from_pixels(4, 1, &px);
    let out = resize(&src, 16, 1, Kernel::Bicubic).unwrap();
    let reds: Vec<u8> = out.as_bytes().chunks_exact(4).map(|p| p[0]).collect();
    assert_eq!(reds[0], 0);
    assert_eq!(reds[15], 255);
    assert!(reds.windows(2).all(|w| w[0] <= w[1]), "{reds:?}");
    assert!(out.as_bytes().chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn downscale_filter_covers_every_source_pixel() {
    let cols = contributions(64, 16, Kernel::Bilinear);
    assert_eq!(cols.len(), 16);
    for c in &cols {
        let sum: f32 = c.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(c.weights.len() >= 4);
    }
}
