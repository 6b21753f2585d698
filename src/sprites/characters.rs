//! The player strip and a few enemies.

use crate::{
    compose::sheet::Frame,
    foundation::{
        color::{DEFAULT_DARKEN, Rgba8},
        core::{PixelBox, px},
    },
    raster::{canvas::Raster, shapes::Coverage},
    sprites::{BROWN, single},
};

/// Side of one player frame as drawn; the job table scales it up.
pub const PLAYER_DRAW_SIZE: u32 = 32;

/// Frame identifiers of the player strip, in strip order.
pub const PLAYER_FRAMES: [&str; 8] = [
    "idle_0", "idle_1", "idle_2", "idle_3", "walk_0", "walk_1", "walk_2", "walk_3",
];

const IDLE_BOB: [i32; 4] = [0, 0, -1, -1];

/// Four idle frames with a one-pixel breathing bob, then a four-phase walk.
pub fn player() -> Vec<Frame> {
    let poses = IDLE_BOB
        .iter()
        .map(|&bob| (bob, 0))
        .chain((0..4).map(|phase| (0, phase)));
    PLAYER_FRAMES
        .iter()
        .zip(poses)
        .map(|(id, (bob, phase))| Frame::new(*id, player_frame(bob, phase)))
        .collect()
}

fn player_frame(bob: i32, walk_phase: usize) -> Raster {
    let mut r = Raster::transparent(PLAYER_DRAW_SIZE, PLAYER_DRAW_SIZE);
    let blue = Rgba8::rgb(0x33, 0x99, 0xff);
    let blue_light = Rgba8::rgb(0x66, 0xbb, 0xff);
    let blue_dark = blue.darken(DEFAULT_DARKEN);
    let skin = Rgba8::rgb(0xff, 0xcc, 0x99);
    let leg = blue.darken(0.7);
    let boot = Rgba8::rgb(0x55, 0x33, 0x22);

    for sx in 13..=19 {
        r.point(sx, 28 + bob, Rgba8::rgba(0, 0, 0, 60));
    }

    let y = 4 + bob;

    // cape
    r.polygon(
        &[px(16, y + 6), px(9, y + 22), px(23, y + 22)],
        Some(Rgba8::rgb(0x22, 0x66, 0xcc)),
        None,
    );
    r.line(px(16, y + 8), px(14, y + 20), Rgba8::rgb(0x22, 0x77, 0xdd), 1);

    // torso and belt
    r.fill_rect(13, y + 8, 6, 10, blue);
    r.fill_rect(13, y + 8, 1, 10, blue_light);
    r.fill_rect(18, y + 8, 1, 10, blue_dark);
    r.fill_rect(12, y + 15, 8, 2, blue.darken(0.5));
    r.fill_rect(15, y + 15, 2, 2, Rgba8::rgb(0xff, 0xdd, 0x44));

    // head
    r.fill_rect(13, y + 2, 6, 6, skin);
    r.point(17, y + 4, Rgba8::rgb(40, 40, 80));
    r.point(18, y + 4, Rgba8::WHITE);
    r.fill_rect(12, y + 1, 8, 3, blue_dark);
    r.fill_rect(12, y + 2, 2, 4, blue_dark);

    // arms, the right one holding the wand
    let swing = [0, 1, 0, -1][walk_phase % 4];
    r.fill_rect(11, y + 9 + swing, 2, 6, blue);
    r.fill_rect(11, y + 14 + swing, 2, 2, skin);
    r.fill_rect(19, y + 9 - swing, 2, 6, blue);
    r.fill_rect(19, y + 14 - swing, 2, 2, skin);
    r.fill_rect(20, y + 8 - swing, 2, 3, BROWN);
    r.point(21, y + 7 - swing, Rgba8::rgb(0x44, 0xaa, 0xff));

    let (left, right) = match walk_phase {
        1 => (-1, 1),
        3 => (1, -1),
        _ => (0, 0),
    };
    r.fill_rect(13, y + 18 + left, 3, 5, leg);
    r.fill_rect(13, y + 22 + left, 3, 2, boot);
    r.fill_rect(16, y + 18 + right, 3, 5, leg);
    r.fill_rect(16, y + 22 + right, 3, 2, boot);

    // soft rim above the hood
    if y > 0 {
        for x in 12..22 {
            let hood = r.get_pixel(x, y + 1).is_some_and(|p| p.a > 0);
            let above_clear = r.get_pixel(x, y).is_some_and(|p| p.a == 0);
            if hood && above_clear {
                r.point(x, y, blue_light.with_alpha(120));
            }
        }
    }
    r
}

const SWARM_BODY: [&str; 12] = [
    "        xxxxxx        ",
    "      xxxxxxxxxx      ",
    "     xxxxxxxxxxxx     ",
    "    xxxxXXxxxxxxxx    ",
    "   xxxxXXXxxxxxxxxx   ",
    "   xxxXXXxxxxxxxxxx   ",
    "   xxxxxxxxxxxxxx x   ",
    "    xxxxxxxxxxxx xx   ",
    "     xxxxxxxxxx  x   ",
    "      xxxxxxxx       ",
    "       xxxxxx        ",
    "        xxxx         ",
];

/// 24x24 slime bug with feelers.
pub fn swarm() -> Vec<Frame> {
    let mut r = Raster::transparent(24, 24);
    let green = Rgba8::rgb(0x44, 0xcc, 0x44);
    let green_l = Rgba8::rgb(0x66, 0xee, 0x66);
    let green_d = green.darken(DEFAULT_DARKEN);
    let tip = Rgba8::rgb(255, 255, 100);
    let eye = Rgba8::rgb(20, 20, 20);

    for (row, line) in (6..).zip(SWARM_BODY) {
        for (col, ch) in (1..).zip(line.bytes()) {
            match ch {
                b'x' => r.point(col, row, green),
                b'X' => r.point(col, row, green_l),
                _ => {}
            }
        }
    }

    r.ellipse(PixelBox::new(5, 7, 18, 19), Some(green), Some(green_l));
    r.ellipse(PixelBox::new(8, 9, 13, 14), Some(green_l), None);
    r.point(10, 11, eye);
    r.point(14, 11, eye);

    // lower half of the belly rim
    let belly = PixelBox::new(5, 12, 18, 20);
    let mut rim = Coverage::new(24, 24);
    rim.mark_ellipse_outline(belly);
    rim.retain(|_, y| 2 * y >= belly.y0 + belly.y1);
    rim.apply(&mut r, green_d);

    r.line(px(9, 7), px(7, 4), green_l, 1);
    r.line(px(14, 7), px(16, 4), green_l, 1);
    r.point(7, 4, tip);
    r.point(16, 4, tip);
    for (x, y) in [(6, 18), (8, 19), (15, 19), (17, 18)] {
        r.point(x, y, green_d);
    }
    single(r)
}

/// 36x36 armored golem.
pub fn tank() -> Vec<Frame> {
    let mut r = Raster::transparent(36, 36);
    let red = Rgba8::rgb(0xcc, 0x44, 0x44);
    let red_l = Rgba8::rgb(0xee, 0x66, 0x66);
    let red_d = red.darken(DEFAULT_DARKEN);
    let gray = Rgba8::rgb(0x88, 0x88, 0x88);
    let gray_d = Rgba8::rgb(0x55, 0x55, 0x55);
    let eye = Rgba8::rgb(255, 100, 100);

    r.ellipse(PixelBox::new(5, 5, 30, 30), Some(red), Some(red_d));
    r.ellipse(PixelBox::new(8, 8, 27, 27), Some(red_d), None);
    r.ellipse(PixelBox::new(11, 11, 24, 24), Some(red), None);
    r.rectangle(PixelBox::new(13, 13, 22, 22), Some(gray_d), None);
    r.rectangle(PixelBox::new(14, 14, 21, 21), Some(gray), None);
    r.fill_rect(17, 13, 2, 10, gray_d);
    r.fill_rect(13, 17, 10, 2, gray_d);

    r.fill_rect(13, 10, 4, 2, eye);
    r.fill_rect(20, 10, 4, 2, eye);
    r.point(14, 10, Rgba8::rgb(255, 200, 200));
    r.point(21, 10, Rgba8::rgb(255, 200, 200));

    // horns
    r.polygon(&[px(8, 6), px(10, 2), px(12, 6)], Some(red_l), None);
    r.polygon(&[px(24, 6), px(26, 2), px(28, 6)], Some(red_l), None);

    // fists
    r.ellipse(PixelBox::new(2, 14, 8, 22), Some(red_d), Some(red_l));
    r.ellipse(PixelBox::new(28, 14, 34, 22), Some(red_d), Some(red_l));
    r.point(4, 17, gray);
    r.point(31, 17, gray);

    // feet
    r.fill_rect(11, 28, 5, 4, red_d);
    r.fill_rect(20, 28, 5, 4, red_d);
    r.fill_rect(12, 28, 3, 1, red_l);
    r.fill_rect(21, 28, 3, 1, red_l);

    r.ellipse(PixelBox::new(5, 5, 30, 30), None, Some(red_l));
    single(r)
}

/// 28x28 swollen bomb creature with a lit fuse.
pub fn exploder() -> Vec<Frame> {
    let mut r = Raster::transparent(28, 28);
    let orange = Rgba8::rgb(0xcc, 0x88, 0x44);
    let orange_l = Rgba8::rgb(0xff, 0xaa, 0x66);
    let orange_d = orange.darken(DEFAULT_DARKEN);
    let yellow = Rgba8::rgb(0xff, 0xdd, 0x44);
    let spark = Rgba8::rgba(255, 200, 50, 200);
    let grim = Rgba8::rgb(30, 0, 0);

    r.ellipse(PixelBox::new(4, 5, 23, 24), Some(orange), None);
    r.ellipse(PixelBox::new(5, 6, 22, 23), Some(orange_l), None);
    r.ellipse(PixelBox::new(9, 10, 18, 19), Some(yellow.with_alpha(180)), None);
    r.ellipse(PixelBox::new(11, 12, 16, 17), Some(Rgba8::rgba(255, 255, 200, 200)), None);

    // veins
    for (a, b) in [
        ((10, 8), (8, 5)),
        ((17, 8), (20, 5)),
        ((7, 15), (4, 14)),
        ((20, 15), (23, 14)),
        ((10, 21), (8, 24)),
        ((17, 21), (19, 24)),
    ] {
        r.line(px(a.0, a.1), px(b.0, b.1), yellow, 1);
    }

    r.line(px(14, 5), px(14, 1), BROWN, 2);
    r.point(14, 0, Rgba8::rgb(255, 255, 100));
    r.point(13, 0, spark);
    r.point(15, 0, spark);
    r.point(14, 1, Rgba8::rgb(255, 255, 200));

    r.point(10, 12, grim);
    r.point(17, 12, grim);
    r.line(px(11, 16), px(16, 16), grim, 1);
    r.point(11, 15, grim);
    r.point(16, 15, grim);

    for (x, y) in [(7, 10), (19, 10), (8, 20), (18, 20)] {
        r.point(x, y, orange_d);
    }
    r.ellipse(PixelBox::new(4, 5, 23, 24), None, Some(orange_l));
    single(r)
}
