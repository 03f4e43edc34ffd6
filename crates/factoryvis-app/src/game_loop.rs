//! Line loop thread: runs the production line at the fixed tick rate and
//! publishes snapshots.
//!
//! The line is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel. Snapshots are stored in
//! shared state for polling and optionally written to stdout as JSON lines.

use std::io::Write;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use factoryvis_core::config::LineConfig;
use factoryvis_core::constants::{DT, TICK_RATE};
use factoryvis_core::state::ProductionSnapshot;
use factoryvis_sim::{HeadlessScene, ProductionLine};

use crate::perf::FrameStats;
use crate::state::LoopCommand;

/// Real time between ticks. The speed multiplier scales simulated time,
/// not the loop rate.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs.
#[derive(Debug, Clone, Default)]
pub struct LoopOptions {
    pub config: LineConfig,
    /// Stop after this many ticks. Runs until shutdown when `None`.
    pub tick_limit: Option<u64>,
    /// Write every snapshot to stdout as one JSON line.
    pub emit_json: bool,
    /// Sleep between ticks to hold the tick rate. Off runs flat out.
    pub paced: bool,
}

/// Spawn the loop thread. Returns the command sender and the thread handle.
pub fn spawn_line_loop(
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<ProductionSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("factoryvis-line-loop".into())
        .spawn(move || {
            let ticks = run_line_loop(options, cmd_rx, &latest_snapshot);
            tracing::info!(ticks, "line loop stopped");
        })?;

    Ok((cmd_tx, handle))
}

/// The loop body. Runs until shutdown, channel disconnect or the tick limit,
/// and returns the number of ticks run.
pub fn run_line_loop(
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<ProductionSnapshot>>,
) -> u64 {
    let LoopOptions {
        config,
        tick_limit,
        emit_json,
        paced,
    } = options;

    let mut line = ProductionLine::new(config, HeadlessScene::new());
    let origin = Instant::now();
    let mut frame_stats = FrameStats::new(Duration::ZERO);
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;
    let stdout = std::io::stdout();

    loop {
        if tick_limit.is_some_and(|limit| ticks >= limit) {
            return ticks;
        }

        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Line(cmd)) => line.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return ticks,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return ticks,
            }
        }

        // 2. Advance one tick (the line handles pause internally)
        let frame_start = Instant::now();
        let snapshot = line.tick(DT);
        ticks += 1;

        // 3. Emit
        if emit_json {
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    let mut out = stdout.lock();
                    if writeln!(out, "{json}").is_err() {
                        tracing::warn!("stdout closed, stopping line loop");
                        return ticks;
                    }
                }
                Err(err) => tracing::warn!(%err, "failed to serialize snapshot"),
            }
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if let Some(fps) = frame_stats.record(frame_start.elapsed(), origin.elapsed()) {
            tracing::debug!(
                fps,
                frame_ms = frame_stats.average_frame_ms(),
                units = line.unit_count(),
                completed = line.completed_count(),
                "loop stats"
            );
        }

        // 5. Sleep until the next tick
        if !paced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, skip the catch-up
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factoryvis_core::commands::LineCommand;
    use factoryvis_core::enums::LinePhase;

    fn unpaced(tick_limit: Option<u64>) -> LoopOptions {
        LoopOptions {
            tick_limit,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Line(LineCommand::Pause)).unwrap();
        tx.send(LoopCommand::Line(LineCommand::SetSpeed { multiplier: 2.0 }))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let commands: Vec<LoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], LoopCommand::Line(LineCommand::Pause));
        assert_eq!(commands[2], LoopCommand::Shutdown);
    }

    #[test]
    fn test_tick_limit_stops_loop() {
        let (_tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);

        let ticks = run_line_loop(unpaced(Some(120)), rx, &latest);

        assert_eq!(ticks, 120);
        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.time.tick, 120);
    }

    #[test]
    fn test_commands_reach_line() {
        let (tx, rx) = mpsc::channel();
        tx.send(LoopCommand::Line(LineCommand::Pause)).unwrap();
        let latest = Mutex::new(None);

        run_line_loop(unpaced(Some(10)), rx, &latest);

        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.phase, LinePhase::Paused);
        assert_eq!(snap.time.tick, 0);
    }

    #[test]
    fn test_shutdown_and_disconnect_stop_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(LoopCommand::Shutdown).unwrap();
        let latest = Mutex::new(None);
        assert_eq!(run_line_loop(unpaced(None), rx, &latest), 0);

        let (tx, rx) = mpsc::channel::<LoopCommand>();
        drop(tx);
        assert_eq!(run_line_loop(unpaced(None), rx, &latest), 0);
    }

    #[test]
    fn test_spawned_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let (_tx, handle) = spawn_line_loop(unpaced(Some(30)), Arc::clone(&latest)).unwrap();
        handle.join().unwrap();

        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
