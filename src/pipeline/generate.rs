use std::collections::BTreeMap;

use crate::{
    compose::sheet::Frame,
    foundation::error::{ForgeError, ForgeResult},
    pipeline::job::{JobSource, SpriteJob},
};

/// Procedural frame source. Must be deterministic: the same generator
/// returns the same frames every call.
pub trait FrameGenerator: Send + Sync {
    fn generate(&self) -> Vec<Frame>;
}

impl<F> FrameGenerator for F
where
    F: Fn() -> Vec<Frame> + Send + Sync,
{
    fn generate(&self) -> Vec<Frame> {
        self()
    }
}

/// Named generators that generator jobs refer to.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn FrameGenerator>>,
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `generator` under `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        generator: impl FrameGenerator + 'static,
    ) -> &mut Self {
        self.generators.insert(name.into(), Box::new(generator));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn FrameGenerator> {
        self.generators.get(name).map(|g| g.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Every generator job in `jobs` must name a registered generator.
    pub fn check_jobs(&self, jobs: &[&SpriteJob]) -> ForgeResult<()> {
        for job in jobs {
            if let JobSource::Generator { generator } = &job.source
                && !self.contains(generator)
            {
                return Err(ForgeError::configuration(format!(
                    "job '{}' uses unknown generator '{generator}'",
                    job.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
