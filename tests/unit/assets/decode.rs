use std::io::Cursor;

use super::*;
use crate::{assets::encode::encode_png, foundation::color::Rgba8};

#[test]
fn decode_png_keeps_straight_alpha() {
    let mut src = Raster::transparent(2, 1);
    src.put_pixel(0, 0, Rgba8::rgba(100, 50, 200, 128));
    src.put_pixel(1, 0, Rgba8::rgb(1, 2, 3));

    let bytes = encode_png(&src).unwrap();
    let decoded = decode_raster(&bytes).unwrap();
    assert_eq!(decoded, src);
}

#[test]
fn decode_converts_rgb_to_opaque_rgba() {
    let img = image::RgbImage::from_raw(1, 1, vec![10, 20, 30]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_raster(&buf).unwrap();
    assert_eq!(decoded.get_pixel(0, 0), Some(Rgba8::rgb(10, 20, 30)));
}

#[test]
fn garbage_bytes_are_decode_errors() {
    assert!(matches!(
        decode_raster(b"not an image"),
        Err(ForgeError::Decode(_))
    ));
}

#[test]
fn missing_file_is_frame_missing() {
    let path = Path::new("target/unit_decode/definitely_missing.png");
    assert!(matches!(
        load_raster(path),
        Err(ForgeError::FrameMissing(_))
    ));
}

#[test]
fn save_then_load_from_nested_dir() {
    let dir = Path::new("target").join("unit_decode").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.png");

    let src = Raster::new(3, 2, Rgba8::rgba(9, 8, 7, 6));
    crate::assets::encode::save_raster(&src, &path).unwrap();
    assert_eq!(load_raster(&path).unwrap(), src);
}
