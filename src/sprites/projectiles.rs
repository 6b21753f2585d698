//! Small single-frame projectiles, all drawn facing right.

use crate::{
    compose::sheet::Frame,
    foundation::{
        color::Rgba8,
        core::{PixelBox, px},
    },
    raster::canvas::Raster,
    sprites::{BROWN, single},
};

pub fn magic_bolt() -> Vec<Frame> {
    let mut r = Raster::transparent(10, 10);
    let blue = Rgba8::rgb(0x44, 0xaa, 0xff);
    let blue_l = Rgba8::rgb(150, 200, 255);

    r.ellipse(PixelBox::new(0, 0, 9, 9), Some(blue.with_alpha(80)), None);
    r.ellipse(PixelBox::new(2, 2, 7, 7), Some(blue), None);
    r.ellipse(PixelBox::new(3, 3, 6, 6), Some(blue_l), None);
    r.point(4, 4, Rgba8::WHITE);
    r.point(5, 4, Rgba8::WHITE);
    // trail
    r.point(1, 4, blue.with_alpha(150));
    r.point(1, 5, blue.with_alpha(150));
    r.point(0, 5, blue.with_alpha(80));
    single(r)
}

pub fn knife() -> Vec<Frame> {
    let mut r = Raster::transparent(16, 8);
    let silver = Rgba8::rgb(0xcc, 0xcc, 0xcc);
    let silver_l = Rgba8::rgb(0xee, 0xee, 0xee);
    let silver_d = Rgba8::rgb(0x99, 0x99, 0x99);

    r.fill_rect(0, 2, 5, 4, BROWN);
    r.fill_rect(1, 3, 3, 2, BROWN.darken(0.8));
    r.fill_rect(5, 1, 1, 6, silver_d);
    r.polygon(
        &[px(6, 2), px(15, 3), px(15, 4), px(6, 5)],
        Some(silver),
        None,
    );
    r.line(px(6, 2), px(14, 3), silver_l, 1);
    r.point(15, 3, silver_l);
    r.point(15, 4, silver_l);
    r.line(px(7, 5), px(14, 4), silver_d, 1);
    single(r)
}

pub fn bomb() -> Vec<Frame> {
    let mut r = Raster::transparent(12, 12);
    let red = Rgba8::rgb(0xff, 0x44, 0x44);

    r.line(px(6, 1), px(8, 0), BROWN, 1);
    r.point(8, 0, Rgba8::rgb(255, 255, 100));
    r.point(9, 0, Rgba8::rgba(255, 200, 50, 180));
    r.ellipse(PixelBox::new(2, 3, 9, 10), Some(Rgba8::rgb(30, 30, 30)), None);
    r.ellipse(PixelBox::new(3, 4, 8, 9), Some(Rgba8::rgb(80, 80, 80)), None);
    r.point(4, 5, Rgba8::rgb(120, 120, 120));
    r.point(5, 5, Rgba8::rgb(100, 100, 100));
    r.ellipse(PixelBox::new(1, 2, 10, 11), None, Some(red.with_alpha(120)));
    single(r)
}

pub fn drone_bullet() -> Vec<Frame> {
    let mut r = Raster::transparent(10, 10);
    let cyan = Rgba8::rgb(0x44, 0xcc, 0xff);

    r.ellipse(PixelBox::new(0, 0, 9, 9), Some(cyan.with_alpha(60)), None);
    r.ellipse(PixelBox::new(1, 2, 8, 7), Some(cyan), None);
    r.ellipse(PixelBox::new(3, 3, 6, 6), Some(Rgba8::rgb(150, 240, 255)), None);
    r.point(4, 4, Rgba8::WHITE);
    r.point(5, 5, Rgba8::WHITE);
    r.point(1, 4, cyan.with_alpha(140));
    r.point(0, 5, cyan.with_alpha(80));
    single(r)
}

pub fn enemy_bullet() -> Vec<Frame> {
    let mut r = Raster::transparent(10, 10);
    let pink = Rgba8::rgb(0xff, 0x44, 0x66);
    let core = Rgba8::rgb(255, 220, 220);

    r.ellipse(PixelBox::new(0, 0, 9, 9), Some(pink.with_alpha(60)), None);
    r.ellipse(PixelBox::new(2, 2, 7, 7), Some(pink), None);
    r.ellipse(PixelBox::new(3, 3, 6, 6), Some(Rgba8::rgb(255, 150, 170)), None);
    for (x, y) in [(5, 0), (9, 5), (5, 9), (0, 5)] {
        r.point(x, y, pink);
    }
    r.point(4, 4, core);
    r.point(5, 5, core);
    single(r)
}
