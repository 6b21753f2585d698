use std::path::PathBuf;

use crate::{
    compose::sheet::{Frame, Layout},
    foundation::error::ForgeResult,
    pipeline::{
        generate::GeneratorRegistry,
        job::{JobSource, JobTable, SpriteJob},
    },
    sprites::{characters, effects, projectiles},
};

struct Entry {
    name: &'static str,
    destination: &'static str,
    frame_size: u32,
    layout: Layout,
    frames: &'static [&'static str],
    draw: fn() -> Vec<Frame>,
}

const DEFAULT: &[&str] = &["default"];
const EXPLOSION: &[&str] = &[
    "frame_0", "frame_1", "frame_2", "frame_3", "frame_4", "frame_5",
];

const GENERATED: &[Entry] = &[
    Entry {
        name: "player",
        destination: "assets/player/player.png",
        frame_size: 128,
        layout: Layout::Strip,
        frames: &characters::PLAYER_FRAMES,
        draw: characters::player,
    },
    Entry {
        name: "enemy-swarm",
        destination: "assets/enemies/swarm.png",
        frame_size: 24,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: characters::swarm,
    },
    Entry {
        name: "enemy-tank",
        destination: "assets/enemies/tank.png",
        frame_size: 36,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: characters::tank,
    },
    Entry {
        name: "enemy-exploder",
        destination: "assets/enemies/exploder.png",
        frame_size: 28,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: characters::exploder,
    },
    Entry {
        name: "magic-bolt",
        destination: "assets/projectiles/magic-bolt.png",
        frame_size: 10,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: projectiles::magic_bolt,
    },
    Entry {
        name: "knife",
        destination: "assets/projectiles/knife.png",
        frame_size: 16,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: projectiles::knife,
    },
    Entry {
        name: "bomb",
        destination: "assets/projectiles/bomb.png",
        frame_size: 12,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: projectiles::bomb,
    },
    Entry {
        name: "drone-bullet",
        destination: "assets/projectiles/drone-bullet.png",
        frame_size: 10,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: projectiles::drone_bullet,
    },
    Entry {
        name: "enemy-bullet",
        destination: "assets/projectiles/enemy-bullet.png",
        frame_size: 10,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: projectiles::enemy_bullet,
    },
    Entry {
        name: "orbit-orb",
        destination: "assets/effects/orbit-orb.png",
        frame_size: 20,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: effects::orbit_orb,
    },
    Entry {
        name: "drone",
        destination: "assets/effects/drone.png",
        frame_size: 16,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: effects::drone,
    },
    Entry {
        name: "explosion",
        destination: "assets/effects/explosion.png",
        frame_size: effects::EXPLOSION_FRAME,
        layout: Layout::Strip,
        frames: EXPLOSION,
        draw: effects::explosion,
    },
    Entry {
        name: "xp-gem",
        destination: "assets/effects/xp-gem.png",
        frame_size: 12,
        layout: Layout::Single,
        frames: DEFAULT,
        draw: effects::xp_gem,
    },
];

/// Hi-res source folders under `assets-src/` and the game-size sprites made from them.
const DOWNSCALED: &[(&str, &str, u32)] = &[
    ("enemy-swarm", "assets/enemies/swarm.png", 24),
    ("enemy-fast", "assets/enemies/fast.png", 20),
    ("enemy-tank", "assets/enemies/tank.png", 36),
    ("enemy-ranged", "assets/enemies/ranged.png", 24),
    ("enemy-exploder", "assets/enemies/exploder.png", 28),
    ("enemy-elite", "assets/enemies/elite.png", 32),
    ("enemy-boss", "assets/enemies/boss.png", 80),
];

/// Registry holding every built-in generator, keyed by job name.
pub fn builtin_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    for entry in GENERATED {
        registry.register(entry.name, entry.draw);
    }
    registry
}

/// Jobs that draw every built-in sprite.
pub fn generation_table() -> ForgeResult<JobTable> {
    JobTable::new(
        GENERATED
            .iter()
            .map(|e| SpriteJob {
                name: e.name.to_string(),
                source: JobSource::Generator {
                    generator: e.name.to_string(),
                },
                destination: PathBuf::from(e.destination),
                frame_size: e.frame_size,
                layout: e.layout,
                frames: strings(e.frames),
            })
            .collect(),
    )
}

/// Jobs that shrink hand-drawn frames from `assets-src/<name>/` to game size.
pub fn downscale_table() -> ForgeResult<JobTable> {
    let player = SpriteJob {
        name: "player".to_string(),
        source: JobSource::Directory {
            dir: PathBuf::from("assets-src/player"),
        },
        destination: PathBuf::from("assets/player/player.png"),
        frame_size: 32,
        layout: Layout::Strip,
        frames: strings(&characters::PLAYER_FRAMES),
    };
    let enemies = DOWNSCALED.iter().map(|&(name, destination, size)| SpriteJob {
        name: name.to_string(),
        source: JobSource::Directory {
            dir: PathBuf::from("assets-src").join(name),
        },
        destination: PathBuf::from(destination),
        frame_size: size,
        layout: Layout::Single,
        frames: strings(DEFAULT),
    });
    JobTable::new(std::iter::once(player).chain(enemies).collect())
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sprites/catalog.rs"]
mod tests;
