use std::path::PathBuf;

use super::*;
use crate::{
    compose::sheet::Layout, foundation::color::Rgba8, raster::canvas::Raster,
};

fn dot() -> Vec<Frame> {
    let mut r = Raster::transparent(4, 4);
    r.point(1, 1, Rgba8::WHITE);
    vec![Frame::new("default", r)]
}

fn job_for(generator: &str) -> SpriteJob {
    SpriteJob {
        name: "dot".to_string(),
        source: JobSource::Generator {
            generator: generator.to_string(),
        },
        destination: PathBuf::from("out/dot.png"),
        frame_size: 4,
        layout: Layout::Single,
        frames: vec![],
    }
}

#[test]
fn closures_and_fns_register() {
    let mut registry = GeneratorRegistry::new();
    registry
        .register("dot", dot)
        .register("blank", || vec![Frame::new("default", Raster::transparent(2, 2))]);

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["blank", "dot"]);
    let frames = registry.get("dot").unwrap().generate();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].raster.get_pixel(1, 1), Some(Rgba8::WHITE));
}

#[test]
fn unknown_generator_fails_the_check() {
    let mut registry = GeneratorRegistry::new();
    registry.register("dot", dot);

    let good = job_for("dot");
    let bad = job_for("ghost");
    assert!(registry.check_jobs(&[&good]).is_ok());
    let err = registry.check_jobs(&[&good, &bad]).unwrap_err();
    assert!(matches!(err, ForgeError::Configuration(_)));
    assert!(err.to_string().contains("ghost"));
}
