use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Rgba8::from_hex("#3399ff").unwrap(), Rgba8::rgb(0x33, 0x99, 0xff));
    assert_eq!(Rgba8::from_hex("44aaff").unwrap(), Rgba8::rgb(0x44, 0xaa, 0xff));
    assert_eq!(
        Rgba8::from_hex("#ff446680").unwrap(),
        Rgba8::rgba(0xff, 0x44, 0x66, 0x80)
    );
}

#[test]
fn hex_rejects_malformed_input() {
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
    assert!(Rgba8::from_hex("").is_err());
    assert!(Rgba8::from_hex("#+1+2+3").is_err());
    assert!(Rgba8::from_hex("-1-2-3").is_err());
    assert!(matches!(
        Rgba8::from_hex("#12345"),
        Err(ForgeError::Configuration(_))
    ));
}

#[test]
fn darken_truncates_and_keeps_alpha() {
    let c = Rgba8::rgba(0x33, 0x99, 0xff, 120);
    assert_eq!(c.darken(DEFAULT_DARKEN), Rgba8::rgba(30, 91, 153, 120));
    assert_eq!(c.darken(0.0), Rgba8::rgba(0, 0, 0, 120));
}

#[test]
fn lighten_saturates_at_white() {
    // 170 * 1.4 lands just below 238 in f64.
    let c = Rgba8::rgb(0x44, 0xdd, 0xaa);
    assert_eq!(c.lighten(DEFAULT_LIGHTEN), Rgba8::rgb(95, 255, 237));
}

#[test]
fn derived_colors_do_not_mutate_the_base() {
    let base = Rgba8::rgb(100, 100, 100);
    let _ = base.darken(0.5);
    let _ = base.with_alpha(10);
    assert_eq!(base, Rgba8::rgb(100, 100, 100));
}

#[test]
fn rgb_arrays_are_opaque() {
    assert_eq!(Rgba8::from([1, 2, 3]), Rgba8::rgba(1, 2, 3, 255));
    assert_eq!(<[u8; 4]>::from(Rgba8::rgba(1, 2, 3, 4)), [1, 2, 3, 4]);
}
