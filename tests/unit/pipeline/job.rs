use super::*;

fn dir_job(name: &str, dest: &str) -> SpriteJob {
    SpriteJob {
        name: name.to_string(),
        source: JobSource::Directory {
            dir: PathBuf::from(format!("src/{name}")),
        },
        destination: PathBuf::from(dest),
        frame_size: 24,
        layout: Layout::Single,
        frames: vec!["default".to_string()],
    }
}

#[test]
fn table_keeps_declaration_order() {
    let table = JobTable::new(vec![
        dir_job("b", "out/b.png"),
        dir_job("a", "out/a.png"),
    ])
    .unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn duplicate_destination_is_a_configuration_error() {
    let err = JobTable::new(vec![
        dir_job("a", "out/same.png"),
        dir_job("b", "out/same.png"),
    ])
    .unwrap_err();
    assert!(matches!(err, ForgeError::Configuration(_)));
    assert!(err.to_string().contains("out/same.png"));
}

#[test]
fn duplicate_name_is_a_configuration_error() {
    let err = JobTable::new(vec![dir_job("a", "out/1.png"), dir_job("a", "out/2.png")])
        .unwrap_err();
    assert!(matches!(err, ForgeError::Configuration(_)));
}

#[test]
fn zero_frame_size_and_empty_frames_are_rejected() {
    let mut zero = dir_job("a", "out/a.png");
    zero.frame_size = 0;
    assert!(matches!(
        JobTable::new(vec![zero]),
        Err(ForgeError::Configuration(_))
    ));

    let mut empty = dir_job("a", "out/a.png");
    empty.frames.clear();
    assert!(matches!(
        JobTable::new(vec![empty]),
        Err(ForgeError::Configuration(_))
    ));

    let mut sneaky = dir_job("a", "out/a.png");
    sneaky.frames = vec!["../etc".to_string()];
    assert!(JobTable::new(vec![sneaky]).is_err());
}

#[test]
fn generator_jobs_may_omit_frames() {
    let job = SpriteJob {
        name: "bolt".to_string(),
        source: JobSource::Generator {
            generator: "magic-bolt".to_string(),
        },
        destination: PathBuf::from("out/bolt.png"),
        frame_size: 10,
        layout: Layout::Single,
        frames: vec![],
    };
    assert!(job.validate().is_ok());
    assert_eq!(job.frame_path(Path::new("."), "default"), None);
}

#[test]
fn select_unknown_lists_available() {
    let table = JobTable::new(vec![
        dir_job("swarm", "out/swarm.png"),
        dir_job("tank", "out/tank.png"),
    ])
    .unwrap();
    let err = table.select(&["swarm", "ghost"]).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, ForgeError::Configuration(_)));
    assert!(msg.contains("ghost"));
    assert!(msg.contains("swarm, tank"));
}

#[test]
fn select_empty_means_all_and_dedupes() {
    let table = JobTable::new(vec![
        dir_job("swarm", "out/swarm.png"),
        dir_job("tank", "out/tank.png"),
    ])
    .unwrap();
    assert_eq!(table.select::<&str>(&[]).unwrap().len(), 2);

    let picked = table.select(&["tank", "tank", "swarm"]).unwrap();
    let names: Vec<&str> = picked.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["tank", "swarm"]);
}

#[test]
fn json_table_parses_with_defaults() {
    let json = r#"{
        "jobs": [
            {
                "name": "player",
                "source": { "kind": "directory", "dir": "assets-src/player" },
                "destination": "assets/player/player.png",
                "frame_size": 32,
                "layout": "strip",
                "frames": ["idle_0", "idle_1"]
            },
            {
                "name": "bolt",
                "source": { "kind": "generator", "generator": "magic-bolt" },
                "destination": "assets/projectiles/magic-bolt.png",
                "frame_size": 10
            }
        ]
    }"#;
    let table = JobTable::from_json_str(json).unwrap();
    let player = table.get("player").unwrap();
    assert_eq!(player.layout, Layout::Strip);
    assert_eq!(
        player.frame_path(Path::new("root"), "idle_1"),
        Some(PathBuf::from("root/assets-src/player/idle_1.png"))
    );
    let bolt = table.get("bolt").unwrap();
    assert_eq!(bolt.layout, Layout::Single);
    assert!(bolt.frames.is_empty());

    let again = JobTable::from_json_str(&table.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again, table);
}

#[test]
fn malformed_json_is_a_configuration_error() {
    assert!(matches!(
        JobTable::from_json_str("{ not json"),
        Err(ForgeError::Configuration(_))
    ));
    assert!(matches!(
        JobTable::from_json_path(Path::new("target/definitely/missing.json")),
        Err(ForgeError::Configuration(_))
    ));
}
