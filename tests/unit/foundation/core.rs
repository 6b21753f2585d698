use super::*;

#[test]
fn pixel_box_is_inclusive_and_normalized() {
    let b = PixelBox::new(9, 9, 0, 0);
    assert_eq!(b, PixelBox::new(0, 0, 9, 9));
    assert_eq!(b.width(), 10);
    assert_eq!(b.height(), 10);
}

#[test]
fn from_origin_size_rejects_empty() {
    assert_eq!(PixelBox::from_origin_size(3, 4, 0, 2), None);
    assert_eq!(
        PixelBox::from_origin_size(3, 4, 2, 5),
        Some(PixelBox::new(3, 4, 4, 8))
    );
}

#[test]
fn clip_to_handles_partial_and_disjoint_boxes() {
    let b = PixelBox::new(-3, 2, 5, 40);
    assert_eq!(b.clip_to(4, 10), Some(PixelBox::new(0, 2, 3, 9)));
    assert_eq!(PixelBox::new(10, 0, 12, 3).clip_to(4, 4), None);
    assert_eq!(PixelBox::new(-5, -5, -1, -1).clip_to(4, 4), None);
    assert_eq!(b.clip_to(0, 10), None);
}

#[test]
fn around_builds_symmetric_box() {
    assert_eq!(PixelBox::around(10, 10, 2), PixelBox::new(8, 8, 12, 12));
}

#[test]
fn extreme_boxes_saturate_instead_of_wrapping() {
    let b = PixelBox::around(i32::MAX - 1, i32::MIN + 1, 5);
    assert_eq!(b.x1, i32::MAX);
    assert_eq!(b.y0, i32::MIN);

    let full = PixelBox::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
    assert_eq!(full.width(), u32::MAX);
    assert_eq!(full.height(), u32::MAX);
    assert_eq!(PixelBox::new(i32::MIN, 0, i32::MAX - 1, 0).width(), u32::MAX);
}
