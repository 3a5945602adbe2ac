use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use liquid_path::{FrameRecord, Playback, Scene, SnapshotStyle, Viewport, svg_document};

#[derive(Parser, Debug)]
#[command(name = "liquid-path", version)]
struct Cli {
    /// Log level filter for stderr diagnostics (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scene and write every frame's path data as JSON.
    Frames(FramesArgs),
    /// Replay a scene up to a point in time and write that frame as an SVG document.
    Snapshot(SnapshotArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Override the scene's frame rate.
    #[arg(long)]
    fps: Option<f64>,
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene time in seconds; the nearest earlier frame is written.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the viewport width.
    #[arg(long)]
    width: Option<f64>,

    /// Override the viewport height.
    #[arg(long)]
    height: Option<f64>,

    /// Stroke colour.
    #[arg(long, default_value = "#111")]
    stroke: String,

    /// Fill colour.
    #[arg(long, default_value = "none")]
    fill: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log)
        .with_target(false)
        .init();

    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Snapshot(args) => cmd_snapshot(args),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut scene = load_scene(&args.in_path)?;
    if let Some(fps) = args.fps {
        scene.fps = fps;
    }

    let frames = Playback::run(&scene).context("replay scene")?;

    ensure_parent_dir(&args.out)?;
    let f = std::fs::File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(f), &frames)
        .with_context(|| format!("write frames '{}'", args.out.display()))?;

    eprintln!("wrote {} frames to {}", frames.len(), args.out.display());
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.at.is_finite() && args.at >= 0.0,
        "--at must be a non-negative number of seconds"
    );

    let scene = load_scene(&args.in_path)?;
    let mut playback = Playback::new(&scene).context("prepare scene")?;
    let target = scene.frame_at(args.at);
    let mut record: Option<FrameRecord> = None;
    for i in 0..=target {
        record = Some(playback.advance(scene.frame_time(i)));
    }
    let record = record.context("scene produced no frame")?;

    let viewport = Viewport {
        width: args.width.unwrap_or(scene.viewport.width),
        height: args.height.unwrap_or(scene.viewport.height),
    };
    let style = SnapshotStyle {
        fill: args.fill,
        stroke: args.stroke,
    };

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, svg_document(&record, viewport, &style))
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!(
        "wrote frame {} ({:.3}s) to {}",
        record.frame,
        record.time,
        args.out.display()
    );
    Ok(())
}
