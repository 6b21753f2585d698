use super::*;

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);
const BLUE: Rgba8 = Rgba8::rgb(0, 0, 255);

fn opaque_count(r: &Raster) -> usize {
    r.as_bytes().chunks_exact(4).filter(|p| p[3] == 255).count()
}

#[test]
fn new_fills_every_pixel() {
    let r = Raster::new(3, 2, Rgba8::rgba(1, 2, 3, 4));
    assert_eq!(r.as_bytes().len(), 3 * 2 * 4);
    assert!(r.as_bytes().chunks_exact(4).all(|p| p == [1, 2, 3, 4]));
    assert_eq!(Raster::transparent(5, 5).get_pixel(4, 4), Some(Rgba8::TRANSPARENT));
}

#[test]
fn from_rgba8_checks_length() {
    assert!(Raster::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(matches!(
        Raster::from_rgba8(2, 2, vec![0; 15]),
        Err(ForgeError::InvalidDimensions(_))
    ));
}

#[test]
fn set_pixel_opaque_replaces_and_out_of_bounds_is_noop() {
    let mut r = Raster::new(2, 2, Rgba8::rgba(9, 9, 9, 100));
    r.set_pixel(1, 0, RED);
    assert_eq!(r.get_pixel(1, 0), Some(RED));

    let before = r.clone();
    r.set_pixel(-1, 0, BLUE);
    r.set_pixel(0, 2, BLUE);
    r.set_pixel(i32::MAX, i32::MIN, BLUE);
    assert_eq!(r, before);
    assert_eq!(r.get_pixel(2, 0), None);
}

#[test]
fn set_pixel_composites_translucent_colors() {
    let mut r = Raster::new(1, 1, Rgba8::BLACK);
    r.set_pixel(0, 0, Rgba8::WHITE.with_alpha(51));
    assert_eq!(r.get_pixel(0, 0), Some(Rgba8::rgb(51, 51, 51)));
}

#[test]
fn fill_rect_covers_half_open_area() {
    let mut r = Raster::transparent(4, 4);
    r.fill_rect(1, 1, 2, 2, RED);
    assert_eq!(opaque_count(&r), 4);
    assert_eq!(r.get_pixel(1, 1), Some(RED));
    assert_eq!(r.get_pixel(2, 2), Some(RED));
    assert_eq!(r.get_pixel(3, 3), Some(Rgba8::TRANSPARENT));
}

#[test]
fn fill_rect_clips_and_ignores_empty() {
    let mut r = Raster::transparent(4, 4);
    r.fill_rect(-2, -2, 4, 4, RED);
    assert_eq!(opaque_count(&r), 4);
    assert_eq!(r.get_pixel(1, 1), Some(RED));
    assert_eq!(r.get_pixel(2, 2), Some(Rgba8::TRANSPARENT));

    let before = r.clone();
    r.fill_rect(0, 0, 0, 3, BLUE);
    r.fill_rect(10, 10, 3, 3, BLUE);
    assert_eq!(r, before);
}

#[test]
fn fill_rect_composites_against_existing_content() {
    let mut r = Raster::new(2, 1, Rgba8::BLACK);
    r.fill_rect(0, 0, 2, 1, Rgba8::WHITE.with_alpha(51));
    assert_eq!(r.get_pixel(0, 0), Some(Rgba8::rgb(51, 51, 51)));
    assert_eq!(r.get_pixel(1, 0), Some(Rgba8::rgb(51, 51, 51)));
}

#[test]
fn paste_overwrites_alpha_and_clips() {
    let mut dst = Raster::new(4, 4, RED);
    let hole = Raster::transparent(2, 2);
    dst.paste(&hole, 1, 1);
    assert_eq!(dst.get_pixel(1, 1), Some(Rgba8::TRANSPARENT));
    assert_eq!(dst.get_pixel(2, 2), Some(Rgba8::TRANSPARENT));
    assert_eq!(dst.get_pixel(3, 3), Some(RED));

    let mut src = Raster::transparent(3, 3);
    src.put_pixel(2, 2, BLUE);
    dst.paste(&src, -2, -2);
    assert_eq!(dst.get_pixel(0, 0), Some(BLUE));
    assert_eq!(dst.get_pixel(1, 0), Some(RED));

    let before = dst.clone();
    dst.paste(&src, 4, 0);
    assert_eq!(dst, before);
}
