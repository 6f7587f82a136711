//! fab-progress CLI - run the progress circle headless and check style files.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::too_many_lines,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::doc_markdown
)]

use clap::{Parser, Subcommand};
use fab_progress_core::{RecordingCanvas, Rect, Widget};
use fab_progress_widgets::{
    FabProgressCircle, FabProgressError, FabProgressStyle, FinalIcon, FloatingActionButton,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fab-progress")]
#[command(about = "Progress arc around a floating action button, rendered headless")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the widget against a simulated background task
    Demo {
        /// Style file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// How long the simulated task takes, in milliseconds
        #[arg(long, default_value = "1500")]
        task_ms: u64,

        /// Make the task fail, which hides the arc instead of completing it
        #[arg(long)]
        fail: bool,

        /// Number of show/complete cycles
        #[arg(long, default_value = "1")]
        runs: u32,

        /// Frames per second of the animation loop
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Print every frame's draw commands as one JSON line on stdout
        #[arg(long)]
        dump: bool,
    },

    /// Check a style file
    Check {
        /// Path to the style file
        file: PathBuf,
    },
}

/// Errors reported by the CLI.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Style(#[from] FabProgressError),

    #[error("failed to write frame dump: {0}")]
    Dump(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("--fps must be at least 1")]
    ZeroFps,

    #[error("run {run} did not settle within {frames} frames")]
    Timeout { run: u32, frames: usize },

    #[error("background task exited without reporting")]
    WorkerGone,
}

type CliResult<T> = Result<T, CliError>;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo {
            config,
            task_ms,
            fail,
            runs,
            fps,
            dump,
        } => {
            let options = DemoOptions {
                config,
                task: Duration::from_millis(task_ms),
                fail,
                runs,
                fps,
                dump,
                pace: true,
            };
            let stdout = io::stdout();
            run_demo(&options, &mut stdout.lock()).map(|report| report.print())
        }
        Commands::Check { file } => check_style(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Check
// =============================================================================

fn load_style(path: &Path) -> CliResult<FabProgressStyle> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FabProgressStyle::from_yaml(&content)?)
}

fn check_style(path: &Path) -> CliResult<()> {
    println!("Checking style: {}", path.display());
    let style = load_style(path)?;
    let durations = style.durations();
    let range = style.sweep_range();

    println!("Style valid!");
    println!("  Arc: {} x {}px", style.arc_color().to_hex(), style.arc_width());
    println!(
        "  Circle: {:?} ({}px)",
        style.circle_size(),
        style.circle_size().diameter()
    );
    println!("  Sweep: {}..{} degrees", range.min(), range.max());
    println!(
        "  Durations (ms): rotation {}, grow {}, shrink {}, complete {}",
        durations.rotation_ms, durations.grow_ms, durations.shrink_ms, durations.complete_ms
    );
    let icon = match style.final_icon() {
        FinalIcon::Checkmark => "checkmark".to_string(),
        FinalIcon::Glyph(glyph) => format!("glyph '{}'", glyph),
        FinalIcon::Path(points) => format!("path of {} points", points.len()),
    };
    println!(
        "  Final icon: {} (shown: {}, {}ms)",
        icon,
        style.show_final_icon(),
        style.final_icon_duration_ms()
    );
    println!("  Reusable: {}", style.reusable());
    Ok(())
}

// =============================================================================
// Demo
// =============================================================================

/// What the simulated background task reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskOutcome {
    Done,
    Failed,
}

/// How a single demo run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    /// The completion sequence played and the listener fired.
    Completed,
    /// The task failed and the arc was hidden.
    Aborted,
    /// The widget did not accept the run (completed and not reusable).
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSummary {
    run: u32,
    outcome: RunOutcome,
    frames: usize,
    elapsed: Duration,
}

#[derive(Debug, Default)]
struct DemoReport {
    runs: Vec<RunSummary>,
    notifications: usize,
}

impl DemoReport {
    fn print(&self) {
        for summary in &self.runs {
            println!(
                "run {}: {:?} after {} frames ({} ms)",
                summary.run,
                summary.outcome,
                summary.frames,
                summary.elapsed.as_millis()
            );
        }
        println!("listener notified {} time(s)", self.notifications);
    }
}

#[derive(Debug, Clone)]
struct DemoOptions {
    config: Option<PathBuf>,
    task: Duration,
    fail: bool,
    runs: u32,
    fps: u32,
    dump: bool,
    /// Sleep between frames so the loop runs in wall-clock time.
    pace: bool,
}

fn run_demo(options: &DemoOptions, out: &mut dyn Write) -> CliResult<DemoReport> {
    if options.fps == 0 {
        return Err(CliError::ZeroFps);
    }
    let style = match &options.config {
        Some(path) => load_style(path)?,
        None => FabProgressStyle::default(),
    };
    let frame = 1.0 / f64::from(options.fps);
    let max_frames = frame_budget(&style, options.task, frame);

    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    let mut circle = FabProgressCircle::builder()
        .child(FloatingActionButton::new("+").with_accessible_name("Upload"))
        .style(style)
        .listener(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build()?;
    let side = circle.get_circle_size().diameter() + circle.get_arc_width();
    circle.layout(Rect::new(0.0, 0.0, side, side));

    let mut report = DemoReport::default();
    for run in 1..=options.runs {
        let summary = run_once(&mut circle, run, options, frame, max_frames, &notifications, out)?;
        info!(run, outcome = ?summary.outcome, frames = summary.frames, "run finished");
        report.runs.push(summary);
    }
    report.notifications = notifications.load(Ordering::SeqCst);
    Ok(report)
}

/// Upper bound on frames for one run: the task, the show delay, one full
/// grow/shrink cycle, the complete sweep and a second of slack.
fn frame_budget(style: &FabProgressStyle, task: Duration, frame: f64) -> usize {
    let d = style.durations();
    let secs = task.as_secs_f64()
        + 0.15
        + d.grow_secs()
        + d.shrink_secs()
        + d.complete_secs()
        + 1.0;
    (secs / frame).ceil() as usize
}

fn run_once(
    circle: &mut FabProgressCircle,
    run: u32,
    options: &DemoOptions,
    frame: f64,
    max_frames: usize,
    notifications: &AtomicUsize,
    out: &mut dyn Write,
) -> CliResult<RunSummary> {
    let started = Instant::now();
    let baseline = notifications.load(Ordering::SeqCst);
    circle.show();

    let (tx, rx) = mpsc::channel();
    let task = options.task;
    let outcome = if options.fail {
        TaskOutcome::Failed
    } else {
        TaskOutcome::Done
    };
    let worker = thread::spawn(move || {
        thread::sleep(task);
        // The receiver may be gone if the run ended early.
        let _ = tx.send(outcome);
    });

    let mut reported: Option<TaskOutcome> = None;
    let mut request_final = false;
    let mut result = None;
    for frames in 1..=max_frames {
        if reported.is_none() {
            // Once the animation clock passes the task length, wait for the
            // worker so unpaced runs see the same sequence as paced ones.
            let due = frame * (frames - 1) as f64 >= task.as_secs_f64();
            let received = if due {
                rx.recv().map_err(|_| TryRecvError::Disconnected)
            } else {
                rx.try_recv()
            };
            match received {
                Ok(TaskOutcome::Done) => {
                    debug!(run, "task done");
                    reported = Some(TaskOutcome::Done);
                    request_final = true;
                }
                Ok(TaskOutcome::Failed) => {
                    debug!(run, "task failed");
                    reported = Some(TaskOutcome::Failed);
                    circle.hide();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => return Err(CliError::WorkerGone),
            }
        }

        // A task shorter than the show delay finishes before the arc runs;
        // keep asking until the arc has started.
        if request_final {
            if circle.begin_final_animation() {
                request_final = false;
            } else if !circle.arc().is_show_pending() {
                warn!(run, "widget did not accept the final animation");
                request_final = false;
                result = Some((RunOutcome::Ignored, frames));
            }
        }

        circle.advance(frame);
        if options.dump {
            dump_frame(circle, out)?;
        }
        if options.pace {
            thread::sleep(Duration::from_secs_f64(frame));
        }

        if result.is_some() {
            break;
        }
        let settled = match reported {
            Some(TaskOutcome::Done) => notifications.load(Ordering::SeqCst) > baseline,
            Some(TaskOutcome::Failed) => circle.arc().alpha() <= 0.0,
            None => false,
        };
        if settled {
            let outcome = if reported == Some(TaskOutcome::Done) {
                RunOutcome::Completed
            } else {
                RunOutcome::Aborted
            };
            result = Some((outcome, frames));
            break;
        }
    }

    if worker.join().is_err() {
        return Err(CliError::WorkerGone);
    }
    let (outcome, frames) = result.ok_or(CliError::Timeout {
        run,
        frames: max_frames,
    })?;
    Ok(RunSummary {
        run,
        outcome,
        frames,
        elapsed: started.elapsed(),
    })
}

fn dump_frame(circle: &FabProgressCircle, out: &mut dyn Write) -> CliResult<()> {
    let mut canvas = RecordingCanvas::new();
    circle.paint(&mut canvas);
    serde_json::to_writer(&mut *out, canvas.commands())?;
    writeln!(out)?;
    Ok(())
}
