use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use spriteforge::{
    BatchOptions, BatchReport, BatchThreading, JobOutcome, JobStatus, JobTable, Kernel,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "spriteforge", version, about = "Procedural pixel-art asset pipeline")]
struct Cli {
    /// Log debug detail.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the built-in procedural sprites.
    Generate(BatchArgs),
    /// Shrink hi-res source frames into game-size sprites.
    Downscale(DownscaleArgs),
    /// List the jobs a table would run.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Jobs to run (all when empty).
    names: Vec<String>,

    /// JSON job table used instead of the built-in one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory sources and destinations are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Run jobs on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Pool size for --parallel.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct DownscaleArgs {
    #[command(flatten)]
    batch: BatchArgs,

    /// Resampling filter: nearest, bilinear, bicubic, lanczos (or lanczosN).
    #[arg(long, default_value = "lanczos")]
    resampling: Kernel,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// List the downscale table instead of the generation table.
    #[arg(long)]
    downscale: bool,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the table as JSON, ready to edit and pass back via --config.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Downscale(args) => cmd_downscale(args),
        Command::List(args) => cmd_list(args),
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install log subscriber")
}

fn load_table(
    config: Option<&Path>,
    builtin: fn() -> spriteforge::ForgeResult<JobTable>,
) -> anyhow::Result<JobTable> {
    match config {
        Some(path) => JobTable::from_json_path(path)
            .with_context(|| format!("load job table '{}'", path.display())),
        None => builtin().context("build built-in job table"),
    }
}

fn options(args: &BatchArgs, kernel: Kernel) -> BatchOptions {
    BatchOptions {
        root: args.root.clone(),
        kernel,
        threading: BatchThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
    }
}

fn cmd_generate(args: BatchArgs) -> anyhow::Result<()> {
    let table = load_table(args.config.as_deref(), spriteforge::generation_table)?;
    let registry = spriteforge::builtin_registry();
    let opts = options(&args, Kernel::Nearest);
    run(&table, args.names.as_slice(), &registry, &opts)
}

fn cmd_downscale(args: DownscaleArgs) -> anyhow::Result<()> {
    let table = load_table(args.batch.config.as_deref(), spriteforge::downscale_table)?;
    let registry = spriteforge::builtin_registry();
    let opts = options(&args.batch, args.resampling);
    run(&table, args.batch.names.as_slice(), &registry, &opts)
}

fn run(
    table: &JobTable,
    names: &[String],
    registry: &spriteforge::GeneratorRegistry,
    opts: &BatchOptions,
) -> anyhow::Result<()> {
    match spriteforge::run_batch(table, names, registry, opts) {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) if e.is_fatal_to_batch() => Err(e).context("batch aborted, nothing was written"),
        Err(e) => Err(e.into()),
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let builtin = if args.downscale {
        spriteforge::downscale_table
    } else {
        spriteforge::generation_table
    };
    let table = load_table(args.config.as_deref(), builtin)?;
    if args.json {
        println!("{}", table.to_json_pretty()?);
        return Ok(());
    }
    for job in table.jobs() {
        println!(
            "{:<16} {:>4}px {:<6} {} frame(s) -> {}",
            job.name,
            job.frame_size,
            job.layout,
            job.frames.len(),
            job.destination.display()
        );
    }
    Ok(())
}

fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        println!("{}", describe(outcome));
    }
    println!(
        "Done: {}/{} sprites processed.",
        report.succeeded(),
        report.total()
    );
}

fn describe(outcome: &JobOutcome) -> String {
    let mut line = match &outcome.status {
        JobStatus::Written {
            path,
            width,
            height,
        } => format!("{} -> {} ({width}x{height})", outcome.name, path.display()),
        JobStatus::Skipped { reason } => format!("SKIP {}: {reason}", outcome.name),
        JobStatus::Failed { reason } => format!("FAIL {}: {reason}", outcome.name),
    };
    if !outcome.missing_frames.is_empty() {
        line.push_str(&format!(" [missing: {}]", outcome.missing_frames.join(", ")));
    }
    line
}
