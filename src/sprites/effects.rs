//! Pickups, allies and the explosion strip.

use crate::{
    compose::sheet::Frame,
    foundation::{
        color::{DEFAULT_DARKEN, DEFAULT_LIGHTEN, Rgba8},
        core::{PixelBox, px},
    },
    raster::canvas::Raster,
    sprites::single,
};

/// Side of one explosion frame.
pub const EXPLOSION_FRAME: u32 = 64;

/// Number of frames in the explosion strip.
pub const EXPLOSION_FRAMES: usize = 6;

const YELLOW: Rgba8 = Rgba8::rgb(0xff, 0xdd, 0x44);
const GRAY: Rgba8 = Rgba8::rgb(100, 100, 100);
const DARK_GRAY: Rgba8 = Rgba8::rgb(60, 60, 60);

pub fn orbit_orb() -> Vec<Frame> {
    let mut r = Raster::transparent(20, 20);
    let orange = Rgba8::rgb(0xff, 0x88, 0x44);

    r.ellipse(PixelBox::new(1, 1, 18, 18), Some(orange.with_alpha(50)), None);
    r.ellipse(PixelBox::new(3, 3, 16, 16), Some(orange.with_alpha(100)), None);
    r.ellipse(PixelBox::new(5, 5, 14, 14), Some(orange), None);
    r.ellipse(PixelBox::new(6, 6, 13, 13), Some(Rgba8::rgb(0xff, 0xaa, 0x66)), None);
    r.ellipse(PixelBox::new(7, 7, 12, 12), Some(YELLOW), None);
    r.ellipse(PixelBox::new(8, 8, 11, 11), Some(Rgba8::WHITE.with_alpha(230)), None);
    // wisps
    for (x, y, a) in [
        (6, 4, 180),
        (13, 4, 180),
        (4, 8, 150),
        (15, 8, 150),
        (7, 15, 120),
        (12, 15, 120),
    ] {
        r.point(x, y, orange.with_alpha(a));
    }
    single(r)
}

pub fn drone() -> Vec<Frame> {
    let mut r = Raster::transparent(16, 16);
    let cyan = Rgba8::rgb(0x44, 0xcc, 0xff);
    let cyan_l = Rgba8::rgb(0x88, 0xee, 0xff);
    let gray = Rgba8::rgb(0x88, 0x88, 0x99);
    let gray_d = Rgba8::rgb(0x55, 0x55, 0x66);

    let blur = cyan_l.with_alpha(100);
    r.line(px(2, 2), px(6, 6), blur, 1);
    r.line(px(13, 2), px(9, 6), blur, 1);
    r.line(px(2, 13), px(6, 9), blur, 1);
    r.line(px(13, 13), px(9, 9), blur, 1);

    r.rectangle(PixelBox::new(5, 5, 10, 10), Some(gray), Some(gray_d));
    r.ellipse(PixelBox::new(6, 6, 9, 9), Some(cyan), Some(cyan_l));
    r.point(7, 7, Rgba8::WHITE);

    r.fill_rect(11, 7, 3, 2, gray_d);
    r.point(13, 7, cyan.with_alpha(200));
    r.point(13, 8, cyan.with_alpha(200));

    r.line(px(5, 5), px(3, 3), gray_d, 1);
    r.line(px(10, 5), px(12, 3), gray_d, 1);
    r.line(px(5, 10), px(3, 12), gray_d, 1);
    r.line(px(10, 10), px(12, 12), gray_d, 1);
    for (x, y) in [(2, 2), (13, 2), (2, 13), (13, 13)] {
        r.point(x, y, gray);
    }
    r.point(5, 7, Rgba8::rgba(255, 100, 100, 200));
    r.point(5, 8, Rgba8::rgba(100, 255, 100, 200));
    single(r)
}

pub fn xp_gem() -> Vec<Frame> {
    let mut r = Raster::transparent(12, 12);
    let gem = Rgba8::rgb(0x44, 0xdd, 0xaa);
    let light = gem.lighten(DEFAULT_LIGHTEN);
    let dark = gem.darken(DEFAULT_DARKEN);
    let diamond = [px(6, 0), px(11, 6), px(6, 11), px(1, 6)];

    r.polygon(
        &[px(6, -1), px(12, 6), px(6, 12), px(0, 6)],
        Some(gem.with_alpha(40)),
        None,
    );
    r.polygon(&diamond, Some(gem), Some(light));
    // facets
    r.polygon(&[px(6, 0), px(1, 6), px(6, 6)], Some(light), None);
    r.polygon(&[px(6, 0), px(11, 6), px(6, 6)], Some(gem), None);
    r.polygon(&[px(1, 6), px(6, 11), px(6, 6)], Some(dark), None);
    r.polygon(&[px(11, 6), px(6, 11), px(6, 6)], Some(gem), None);
    r.point(4, 3, Rgba8::WHITE);
    r.point(3, 4, Rgba8::WHITE.with_alpha(180));
    r.polygon(&diamond, None, Some(light));
    single(r)
}

/// Six 64x64 frames: flash, fireball, peak, smoke, embers, remnants.
pub fn explosion() -> Vec<Frame> {
    (0..EXPLOSION_FRAMES)
        .map(|i| Frame::new(format!("frame_{i}"), explosion_frame(i)))
        .collect()
}

fn explosion_frame(stage: usize) -> Raster {
    let mut r = Raster::transparent(EXPLOSION_FRAME, EXPLOSION_FRAME);
    let orange = Rgba8::rgb(0xff, 0x66, 0x00);
    let red = Rgba8::rgb(0xff, 0x22, 0x00);
    let dark_red = Rgba8::rgb(0x88, 0x11, 0x00);
    let disc = |r: &mut Raster, inset: i32, color: Rgba8| {
        r.ellipse(PixelBox::new(inset, inset, 64 - inset, 64 - inset), Some(color), None);
    };

    match stage {
        0 => {
            disc(&mut r, 24, YELLOW.with_alpha(200));
            disc(&mut r, 20, Rgba8::WHITE.with_alpha(120));
            disc(&mut r, 27, Rgba8::WHITE.with_alpha(250));
        }
        1 => {
            disc(&mut r, 12, orange.with_alpha(180));
            disc(&mut r, 16, orange);
            disc(&mut r, 22, YELLOW);
            disc(&mut r, 27, Rgba8::WHITE.with_alpha(220));
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let b = PixelBox::around(32 + dx * 18, 32 + dy * 18, 4);
                r.ellipse(b, Some(orange.with_alpha(150)), None);
            }
        }
        2 => {
            disc(&mut r, 4, red.with_alpha(100));
            disc(&mut r, 8, orange.with_alpha(180));
            disc(&mut r, 14, orange);
            disc(&mut r, 20, YELLOW.with_alpha(220));
            disc(&mut r, 26, Rgba8::WHITE.with_alpha(180));
            for (dx, dy) in [(-22, -8), (20, -12), (-15, 18), (18, 15), (-8, -20), (10, 22)] {
                let b = PixelBox::around(32 + dx, 32 + dy, 2);
                r.ellipse(b, Some(orange.with_alpha(200)), None);
            }
        }
        3 => {
            disc(&mut r, 6, dark_red.with_alpha(80));
            disc(&mut r, 10, orange.with_alpha(120));
            disc(&mut r, 16, GRAY.with_alpha(100));
            disc(&mut r, 22, orange.with_alpha(150));
            disc(&mut r, 28, YELLOW.with_alpha(100));
            for (dx, dy) in [(-16, -10), (14, -14), (-12, 16), (16, 12)] {
                let b = PixelBox::around(32 + dx, 32 + dy, 5);
                r.ellipse(b, Some(GRAY.with_alpha(80)), None);
            }
        }
        4 => {
            disc(&mut r, 8, DARK_GRAY.with_alpha(60));
            disc(&mut r, 14, GRAY.with_alpha(70));
            disc(&mut r, 20, GRAY.with_alpha(50));
            for (dx, dy) in [(-10, -6), (8, -10), (-6, 12), (10, 8)] {
                r.point(32 + dx, 32 + dy, orange.with_alpha(100));
            }
        }
        _ => {
            disc(&mut r, 16, DARK_GRAY.with_alpha(30));
            disc(&mut r, 22, GRAY.with_alpha(25));
            r.point(28, 24, GRAY.with_alpha(40));
            r.point(36, 38, GRAY.with_alpha(30));
        }
    }
    r
}
