use std::path::PathBuf;

use super::*;
use crate::foundation::color::Rgba8;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_encode").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn save_creates_missing_parents() {
    let dir = scratch("parents");
    let path = dir.join("a/b/c/sprite.png");
    save_raster(&Raster::new(3, 2, Rgba8::rgba(9, 8, 7, 6)), &path).unwrap();
    assert!(path.is_file());
}

#[test]
fn bare_file_name_needs_no_parent() {
    assert!(ensure_parent_dir(Path::new("sprite.png")).is_ok());
}

#[test]
fn parent_that_is_a_file_is_a_write_error() {
    let dir = scratch("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let err = save_raster(&Raster::transparent(1, 1), &blocker.join("out.png")).unwrap_err();
    assert!(matches!(err, ForgeError::Write(_)));
}

#[test]
fn encoded_png_has_signature() {
    let bytes = encode_png(&Raster::transparent(4, 4)).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
