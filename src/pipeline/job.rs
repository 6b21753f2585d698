use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    compose::sheet::Layout,
    foundation::error::{ForgeError, ForgeResult},
};

/// Where a job's frames come from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobSource {
    /// A registered procedural generator.
    Generator { generator: String },
    /// A directory holding one `<frame>.png` per frame identifier.
    Directory { dir: PathBuf },
}

/// One output artifact: where frames come from, how big each frame ends up
/// and where the composed image goes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteJob {
    pub name: String,
    pub source: JobSource,
    pub destination: PathBuf,
    /// Target frame width in pixels (directory frames are resized to a square
    /// of this size, generated frames keep their aspect ratio).
    pub frame_size: u32,
    #[serde(default)]
    pub layout: Layout,
    /// Ordered frame identifiers. Empty on a generator job means "every frame
    /// the generator produces, in its order".
    #[serde(default)]
    pub frames: Vec<String>,
}

impl SpriteJob {
    pub fn validate(&self) -> ForgeResult<()> {
        if self.name.trim().is_empty() {
            return Err(ForgeError::configuration("job name must be non-empty"));
        }
        if self.frame_size == 0 {
            return Err(ForgeError::configuration(format!(
                "job '{}' frame_size must be > 0",
                self.name
            )));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(ForgeError::configuration(format!(
                "job '{}' destination must be non-empty",
                self.name
            )));
        }
        match &self.source {
            JobSource::Generator { generator } if generator.trim().is_empty() => {
                return Err(ForgeError::configuration(format!(
                    "job '{}' generator name must be non-empty",
                    self.name
                )));
            }
            JobSource::Directory { .. } if self.frames.is_empty() => {
                return Err(ForgeError::configuration(format!(
                    "job '{}' reads a directory and must list at least one frame",
                    self.name
                )));
            }
            _ => {}
        }
        for id in &self.frames {
            if id.trim().is_empty() || id.contains(['/', '\\']) {
                return Err(ForgeError::configuration(format!(
                    "job '{}' has invalid frame identifier '{id}'",
                    self.name
                )));
            }
        }
        Ok(())
    }

    /// Frame file for `id` inside a directory source rooted at `root`.
    pub fn frame_path(&self, root: &Path, id: &str) -> Option<PathBuf> {
        match &self.source {
            JobSource::Directory { dir } => Some(root.join(dir).join(format!("{id}.png"))),
            JobSource::Generator { .. } => None,
        }
    }
}

/// Immutable, validated list of jobs keyed by unique name and destination.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct JobTable {
    jobs: Vec<SpriteJob>,
}

#[derive(serde::Deserialize)]
struct JobTableFile {
    jobs: Vec<SpriteJob>,
}

impl JobTable {
    /// Validate every job plus name and destination uniqueness.
    pub fn new(jobs: Vec<SpriteJob>) -> ForgeResult<Self> {
        let mut names = HashSet::new();
        let mut destinations = HashSet::new();
        for job in &jobs {
            job.validate()?;
            if !names.insert(job.name.as_str()) {
                return Err(ForgeError::configuration(format!(
                    "duplicate job name '{}'",
                    job.name
                )));
            }
            if !destinations.insert(job.destination.as_path()) {
                return Err(ForgeError::configuration(format!(
                    "job '{}' writes '{}', which another job already writes",
                    job.name,
                    job.destination.display()
                )));
            }
        }
        Ok(Self { jobs })
    }

    /// Parse `{"jobs": [...]}`.
    pub fn from_json_str(s: &str) -> ForgeResult<Self> {
        let file: JobTableFile = serde_json::from_str(s)
            .map_err(|e| ForgeError::configuration(format!("parse job table JSON: {e}")))?;
        Self::new(file.jobs)
    }

    pub fn from_json_path(path: &Path) -> ForgeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::configuration(format!("read job table '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> ForgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ForgeError::Other(e.into()))
    }

    pub fn jobs(&self) -> &[SpriteJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SpriteJob> {
        self.jobs.iter().find(|j| j.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.jobs.iter().map(|j| j.name.as_str())
    }

    /// Resolve a selection. An empty selection means every job in table
    /// order; repeated names run once. Any unknown name fails the whole
    /// selection with the unknown and available names listed.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> ForgeResult<Vec<&SpriteJob>> {
        if names.is_empty() {
            return Ok(self.jobs.iter().collect());
        }

        let unknown: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| self.get(n).is_none())
            .collect();
        if !unknown.is_empty() {
            return Err(ForgeError::configuration(format!(
                "unknown sprite(s): {}; available: {}",
                unknown.join(", "),
                self.names().collect::<Vec<_>>().join(", ")
            )));
        }

        let mut seen = HashSet::new();
        Ok(names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| seen.insert(*n))
            .filter_map(|n| self.get(n))
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/job.rs"]
mod tests;
