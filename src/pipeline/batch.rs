use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    assets::{decode::load_raster, encode::save_raster},
    compose::sheet::{Frame, compose_frames},
    foundation::error::{ForgeError, ForgeResult},
    pipeline::{
        generate::GeneratorRegistry,
        job::{JobSource, JobTable, SpriteJob},
    },
    raster::canvas::Raster,
    resample::{kernel::Kernel, resize::resize},
};

/// Whether jobs run one after another or on a rayon pool.
#[derive(Clone, Debug, Default)]
pub struct BatchThreading {
    pub parallel: bool,
    /// Pool size when `parallel` is set. `None` lets rayon decide.
    pub threads: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Directory every job's source dir and destination are resolved against.
    pub root: PathBuf,
    /// Kernel used to bring directory frames to the job's frame size.
    pub kernel: Kernel,
    pub threading: BatchThreading,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            kernel: Kernel::default(),
            threading: BatchThreading::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Written {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// The job had nothing to work from (missing source directory, no frames).
    Skipped { reason: String },
    Failed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobOutcome {
    pub name: String,
    pub status: JobStatus,
    /// Requested frames that could not be found, in request order.
    pub missing_frames: Vec<String>,
}

impl JobOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, JobStatus::Written { .. })
    }
}

/// Per-job outcomes in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }

    pub fn get(&self, name: &str) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

/// Run the selected jobs of `table` (all of them when `names` is empty).
///
/// Configuration problems (unknown names, unregistered generators, a zero
/// thread count) fail the whole batch before any job runs. Everything else is
/// recorded per job and the batch continues.
pub fn run_batch<S: AsRef<str>>(
    table: &JobTable,
    names: &[S],
    registry: &GeneratorRegistry,
    opts: &BatchOptions,
) -> ForgeResult<BatchReport> {
    let jobs = table.select(names)?;
    registry.check_jobs(&jobs)?;

    tracing::info!(
        jobs = jobs.len(),
        root = %opts.root.display(),
        kernel = %opts.kernel,
        "starting batch"
    );

    let outcomes = if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| {
            jobs.par_iter()
                .map(|job| run_job(job, registry, opts))
                .collect::<Vec<_>>()
        })
    } else {
        jobs.iter()
            .map(|job| run_job(job, registry, opts))
            .collect::<Vec<_>>()
    };

    let report = BatchReport { outcomes };
    tracing::info!(
        succeeded = report.succeeded(),
        total = report.total(),
        "batch finished"
    );
    Ok(report)
}

/// Run one job to completion. Never panics on bad input and never fails the
/// caller: every problem ends up in the returned outcome.
#[tracing::instrument(skip_all, fields(job = %job.name))]
pub fn run_job(job: &SpriteJob, registry: &GeneratorRegistry, opts: &BatchOptions) -> JobOutcome {
    let mut missing = Vec::new();
    let status = match execute(job, registry, opts, &mut missing) {
        Ok(status) => status,
        Err(ForgeError::SourceMissing(reason)) => {
            tracing::warn!("skip {}: {reason}", job.name);
            JobStatus::Skipped { reason }
        }
        Err(e) => {
            tracing::error!("{} failed: {e}", job.name);
            JobStatus::Failed {
                reason: e.to_string(),
            }
        }
    };
    JobOutcome {
        name: job.name.clone(),
        status,
        missing_frames: missing,
    }
}

fn execute(
    job: &SpriteJob,
    registry: &GeneratorRegistry,
    opts: &BatchOptions,
    missing: &mut Vec<String>,
) -> ForgeResult<JobStatus> {
    let frames = match &job.source {
        JobSource::Generator { generator } => {
            generated_frames(job, generator, registry, missing)?
        }
        JobSource::Directory { dir } => directory_frames(job, dir, opts, missing)?,
    };

    if !missing.is_empty() {
        tracing::warn!("{}: missing frames: {}", job.name, missing.join(", "));
    }
    if frames.is_empty() {
        return Err(ForgeError::source_missing("no source frames found"));
    }

    let sheet = compose_frames(frames, job.layout)?;
    let path = opts.root.join(&job.destination);
    save_raster(&sheet, &path)?;

    let (width, height) = sheet.dimensions();
    tracing::info!("{}: {} ({width}x{height})", job.name, path.display());
    Ok(JobStatus::Written {
        path,
        width,
        height,
    })
}

fn generated_frames(
    job: &SpriteJob,
    generator: &str,
    registry: &GeneratorRegistry,
    missing: &mut Vec<String>,
) -> ForgeResult<Vec<Frame>> {
    let generator_impl = registry.get(generator).ok_or_else(|| {
        ForgeError::configuration(format!("unknown generator '{generator}'"))
    })?;
    let produced = generator_impl.generate();

    let picked = if job.frames.is_empty() {
        produced
    } else {
        let mut picked = Vec::with_capacity(job.frames.len());
        for id in &job.frames {
            match produced.iter().find(|f| &f.id == id) {
                Some(frame) => picked.push(frame.clone()),
                None => missing.push(id.clone()),
            }
        }
        picked
    };

    picked
        .into_iter()
        .map(|frame| {
            let raster = fit_generated(frame.raster, job.frame_size)?;
            Ok(Frame::new(frame.id, raster))
        })
        .collect()
}

/// Generated art is drawn at a small native size and scaled to the job's
/// frame width with `Nearest`, keeping the aspect ratio.
fn fit_generated(raster: Raster, frame_size: u32) -> ForgeResult<Raster> {
    let (w, h) = raster.dimensions();
    if w == 0 || h == 0 {
        return Err(ForgeError::invalid_dimensions(format!(
            "generated frame is {w}x{h}"
        )));
    }
    if w == frame_size {
        return Ok(raster);
    }
    let scaled_h = (u64::from(h) * u64::from(frame_size) + u64::from(w) / 2) / u64::from(w);
    let scaled_h = u32::try_from(scaled_h.max(1)).map_err(|_| {
        ForgeError::invalid_dimensions(format!("scaled frame height {scaled_h} overflows"))
    })?;
    resize(&raster, frame_size, scaled_h, Kernel::Nearest)
}

fn directory_frames(
    job: &SpriteJob,
    dir: &Path,
    opts: &BatchOptions,
    missing: &mut Vec<String>,
) -> ForgeResult<Vec<Frame>> {
    let src_dir = opts.root.join(dir);
    if !src_dir.is_dir() {
        return Err(ForgeError::source_missing(format!(
            "source folder not found: {}",
            src_dir.display()
        )));
    }

    let mut frames = Vec::with_capacity(job.frames.len());
    for id in &job.frames {
        let path = job.frame_path(&opts.root, id).ok_or_else(|| {
            ForgeError::configuration(format!("job '{}' has no source folder", job.name))
        })?;
        let raster = match load_raster(&path) {
            Ok(r) => r,
            Err(ForgeError::FrameMissing(_)) => {
                missing.push(id.clone());
                continue;
            }
            Err(e) => return Err(e),
        };

        let (w, h) = raster.dimensions();
        if w != h {
            tracing::warn!("{}/{id}.png is not square ({w}x{h}), will stretch", job.name);
        }
        let sized = if (w, h) == (job.frame_size, job.frame_size) {
            raster
        } else {
            resize(&raster, job.frame_size, job.frame_size, opts.kernel)?
        };
        frames.push(Frame::new(id.clone(), sized));
    }
    Ok(frames)
}

fn build_thread_pool(threads: Option<usize>) -> ForgeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ForgeError::configuration(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ForgeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
