use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use clockface::{ClockApp, FormState, LogAudio, Surface, SvgFile, TICK, Ticker};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clockface", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw one face as SVG, or PNG when the output ends in `.png`.
    Frame(FrameArgs),
    /// Keep an SVG file in sync with the wall clock, ringing configured alarms.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Form state JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Local time to draw, e.g. `2026-10-19T09:30:00`. Defaults to now.
    #[arg(long, value_parser = parse_at)]
    at: Option<NaiveDateTime>,

    /// Output path (`.svg` or `.png`).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Form state JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// SVG file rewritten every tick.
    #[arg(long)]
    out: PathBuf,

    /// Stop after this many ticks (0 runs forever).
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Dismiss ringing alarms after this many ticks.
    #[arg(long, default_value_t = 60)]
    dismiss_after: u64,
}

fn parse_at(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn read_form_json(path: Option<&Path>) -> anyhow::Result<FormState> {
    let Some(path) = path else {
        return Ok(FormState::default());
    };
    let f = File::open(path).with_context(|| format!("open form state '{}'", path.display()))?;
    let form: FormState = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse form state '{}'", path.display()))?;
    Ok(form)
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let form = read_form_json(args.config.as_deref())?;
    let at = args.at.unwrap_or_else(now);

    let mut app = ClockApp::new(form, Surface::new(), LogAudio::new())?;
    app.start(&at)?;
    let doc = app.document();

    let is_png = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        // Theme logos are relative to the working directory.
        let frame = clockface::render::raster::rasterize(&doc, Some(Path::new(".")))?;
        clockface::render::raster::save_png(&frame, &args.out)?;
    } else {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, doc)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let form = read_form_json(args.config.as_deref())?;
    let mut app = ClockApp::new(form, SvgFile::new(&args.out), LogAudio::new())?;
    app.start(&now())?;
    info!(out = %args.out.display(), "clock running");

    let mut ticker = Ticker::new(TICK);
    let mut ringing_for = 0u64;
    let mut n = 0u64;
    while args.ticks == 0 || n < args.ticks {
        ticker.wait();
        app.tick(&now())?;
        n += 1;

        if app.alarms().active().is_empty() {
            ringing_for = 0;
            continue;
        }
        ringing_for += 1;
        if ringing_for >= args.dismiss_after {
            app.dismiss_alarms();
            ringing_for = 0;
        }
    }
    Ok(())
}
