use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "herokit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the landing view at one instant.
    Frame(FrameArgs),
    /// Sample the landing view at a fixed step and print one JSON line per sample.
    Timeline(TimelineArgs),
    /// Validate a configuration file.
    Check(CheckArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Html,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Configuration JSON. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds since mount.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Vertical scroll offset, applied right after mount.
    #[arg(long)]
    scroll_y: Option<f64>,

    /// Viewport size as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1440x900", value_parser = parse_viewport)]
    viewport: herokit::Viewport,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Configuration JSON. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Last sample time in milliseconds (inclusive).
    #[arg(long)]
    until_ms: u64,

    /// Distance between samples in milliseconds.
    #[arg(long, default_value_t = 100)]
    step_ms: u64,

    /// Vertical scroll offset, applied right after mount.
    #[arg(long)]
    scroll_y: Option<f64>,

    /// Viewport size as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1440x900", value_parser = parse_viewport)]
    viewport: herokit::Viewport,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Configuration JSON.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn parse_viewport(s: &str) -> Result<herokit::Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    herokit::Viewport::new(w, h).map_err(|e| e.to_string())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<herokit::HeroConfig> {
    match path {
        Some(p) => herokit::HeroConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(herokit::HeroConfig::default()),
    }
}

fn mount(
    config: herokit::HeroConfig,
    viewport: herokit::Viewport,
    scroll_y: Option<f64>,
) -> anyhow::Result<(herokit::VirtualHost, herokit::MountedHero)> {
    let host = herokit::VirtualHost::new(viewport);
    let hero = herokit::HeroView::mount(&host, config)?;
    if let Some(y) = scroll_y {
        host.scroll_to(y);
    }
    Ok((host, hero))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let (host, hero) = mount(config, args.viewport, args.scroll_y)?;
    host.advance_to(Duration::from_millis(args.at_ms));
    let frame = hero.frame(&host);
    tracing::debug!(at_ms = args.at_ms, cursor = frame.hero.ticker.cursor, "frame evaluated");

    let body = match args.format {
        Format::Json => serde_json::to_string_pretty(&frame)?,
        Format::Html => herokit::render_html(&frame),
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, body)
                .with_context(|| format!("write frame '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.step_ms > 0, "--step-ms must be greater than zero");
    let config = load_config(args.config.as_deref())?;
    let (host, hero) = mount(config, args.viewport, args.scroll_y)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for at in sample_times(args.until_ms, args.step_ms) {
        host.advance_to(Duration::from_millis(at));
        serde_json::to_writer(&mut out, &hero.frame(&host))?;
        writeln!(out)?;
    }
    out.flush()?;
    hero.unmount();
    Ok(())
}

/// `0, step, 2 * step, ...` up to `until_ms` inclusive, stopping before `u64` overflow.
fn sample_times(until_ms: u64, step_ms: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(0u64), move |t| t.checked_add(step_ms))
        .take_while(move |t| *t <= until_ms)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    load_config(Some(&args.config))?
        .validate()
        .with_context(|| format!("invalid config '{}'", args.config.display()))?;
    eprintln!("ok {}", args.config.display());
    Ok(())
}
