//! factoryvis: run a production line headless and control it from stdin.
//!
//! Usage:
//!   factoryvis [--config line.json] [--ticks N] [--speed X] [--json]
//!
//! Control lines on stdin: pause, resume, toggle, reset, speed <x>, quit.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use factoryvis_app::control::parse_control;
use factoryvis_app::game_loop::LoopOptions;
use factoryvis_app::state::{AppState, LoopCommand};
use factoryvis_core::config::LineConfig;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    ticks: Option<u64>,
    speed: Option<f64>,
    json: bool,
    help: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => LineConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LineConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.initial_speed = speed;
        config.validate().context("invalid --speed")?;
    }

    let state = Arc::new(AppState::new());
    let handle = state.start(LoopOptions {
        config,
        tick_limit: args.ticks,
        emit_json: args.json,
        paced: true,
    })?;

    // Detached: a blocked stdin read must not hold up exit.
    let controls = Arc::clone(&state);
    std::thread::Builder::new()
        .name("factoryvis-controls".into())
        .spawn(move || read_controls(&controls))
        .context("failed to spawn control reader")?;

    handle
        .join()
        .map_err(|_| anyhow::anyhow!("line loop thread panicked"))?;

    if let Some(snap) = state.snapshot() {
        tracing::info!(
            completed = snap.stats.completed_count,
            per_hour = snap.stats.per_hour,
            elapsed = %snap.stats.elapsed_time_formatted,
            "final statistics"
        );
    }
    Ok(())
}

/// Forward stdin control lines to the loop until EOF, `quit` or the loop
/// goes away.
fn read_controls(state: &AppState) {
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else {
            return;
        };
        match parse_control(&line) {
            Ok(Some(command)) => {
                let shutdown = command == LoopCommand::Shutdown;
                if !state.send(command) || shutdown {
                    return;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "ignoring control line"),
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--ticks" => {
                let value = args.next().context("--ticks needs a count")?;
                let ticks = value
                    .parse::<u64>()
                    .with_context(|| format!("bad --ticks: {value}"))?;
                parsed.ticks = Some(ticks);
            }
            "--speed" => {
                let value = args.next().context("--speed needs a value")?;
                let speed = value
                    .parse::<f64>()
                    .with_context(|| format!("bad --speed: {value}"))?;
                parsed.speed = Some(speed);
            }
            "--json" => parsed.json = true,
            "help" | "--help" | "-h" => parsed.help = true,
            other => anyhow::bail!("unknown argument: {other} (try --help)"),
        }
    }
    Ok(parsed)
}

fn print_usage() {
    eprintln!(
        "factoryvis: headless house production line\n\
         \n\
         Options:\n\
         \n\
           --config <path>  Line layout JSON (default: three reference stations)\n\
           --ticks <N>      Stop after N ticks (default: run until quit)\n\
           --speed <x>      Initial speed multiplier, 0.1 to 5.0\n\
           --json           Print every snapshot to stdout as a JSON line\n\
         \n\
         Controls (stdin):\n\
         \n\
           pause | resume | toggle | reset | speed <x> | quit\n\
         \n\
         Set RUST_LOG=debug for per-unit events.\n"
    );
}
