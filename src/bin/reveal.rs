use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reveal_timeline::{RevealDoc, Schedule, SceneId, SceneVisualState, TimelineEvaluator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    /// Log schedule construction at debug level (overridden by `RUST_LOG`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a reveal document and print its window table.
    Check(CheckArgs),
    /// Print the visual state of every scene at one progress value.
    Sample(SampleArgs),
    /// Print visual states across `[0, 1]`, one JSON line per step.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input reveal document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input reveal document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Progress value; clamped into `[0, 1]`.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input reveal document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of intervals; `steps + 1` samples are printed.
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Also sweep backward and fail unless every sample matches the forward pass.
    #[arg(long, default_value_t = false)]
    scrub: bool,
}

#[derive(serde::Serialize)]
struct FrameOut<'a> {
    progress: f64,
    scenes: Vec<SceneOut<'a>>,
}

#[derive(serde::Serialize)]
struct SceneOut<'a> {
    id: &'a SceneId,
    #[serde(flatten)]
    state: SceneVisualState,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_schedule(path: &std::path::Path) -> anyhow::Result<Schedule> {
    let doc = RevealDoc::from_path(path)?;
    let schedule = doc
        .build()
        .with_context(|| format!("build schedule from '{}'", path.display()))?;
    Ok(schedule)
}

fn frame<'a>(progress: f64, schedule: &'a Schedule) -> FrameOut<'a> {
    let states = TimelineEvaluator::evaluate(progress, schedule);
    FrameOut {
        progress,
        scenes: schedule
            .entries()
            .iter()
            .zip(states)
            .map(|(row, state)| SceneOut {
                id: row.scene().id(),
                state,
            })
            .collect(),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let schedule = load_schedule(&args.in_path)?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, schedule.entries()).context("write window table")?;
    writeln!(out)?;
    eprintln!(
        "ok: {} reveal scenes, at most {} visible at once",
        schedule.reveal_count(),
        schedule.max_concurrent_reveals()
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let schedule = load_schedule(&args.in_path)?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &frame(args.progress, &schedule))
        .context("write sample")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let schedule = load_schedule(&args.in_path)?;
    let at = |i: u32| f64::from(i) / f64::from(args.steps);

    let mut out = std::io::stdout().lock();
    let mut forward = Vec::with_capacity(args.steps as usize + 1);
    for i in 0..=args.steps {
        let f = frame(at(i), &schedule);
        serde_json::to_writer(&mut out, &f).context("write sweep line")?;
        writeln!(out)?;
        forward.push(TimelineEvaluator::evaluate(at(i), &schedule));
    }

    if args.scrub {
        for i in (0..=args.steps).rev() {
            let back = TimelineEvaluator::evaluate(at(i), &schedule);
            anyhow::ensure!(
                back == forward[i as usize],
                "backward sample at progress {} differs from forward pass",
                at(i)
            );
        }
        eprintln!("scrub ok: {} samples match in both directions", forward.len());
    }
    Ok(())
}
