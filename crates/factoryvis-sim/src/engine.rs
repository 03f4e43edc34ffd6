//! Production line: the scheduler at the heart of the simulation.
//!
//! `ProductionLine` owns the hecs world holding every unit, processes
//! operator commands, runs the systems and produces `ProductionSnapshot`s.
//! It never renders. Units are handed to a [`Scene`] on spawn and taken back
//! on retirement, so the same line drives a renderer or a headless test.

use std::collections::{BTreeSet, VecDeque};
use std::time::Duration;

use hecs::{Entity, World};

use factoryvis_core::commands::LineCommand;
use factoryvis_core::components::Unit;
use factoryvis_core::config::LineConfig;
use factoryvis_core::constants::{MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER};
use factoryvis_core::enums::LinePhase;
use factoryvis_core::events::LineEvent;
use factoryvis_core::state::{ProductionSnapshot, StatsView};
use factoryvis_core::types::{sanitize_delta, SimTime, UnitId};

use crate::clock::{Clock, WallClock};
use crate::conveyor::ConveyorBelt;
use crate::house::HouseShell;
use crate::scene::Scene;
use crate::stats;
use crate::systems;

/// The production scheduler. Owns the unit world and all line state.
pub struct ProductionLine<S: Scene> {
    world: World,
    scene: S,
    conveyor: ConveyorBelt,
    config: LineConfig,
    time: SimTime,
    phase: LinePhase,
    speed_multiplier: f64,
    /// Active units, oldest first.
    spawn_order: Vec<Entity>,
    next_unit_id: u32,
    completed_count: u32,
    active_stages: BTreeSet<u8>,
    command_queue: VecDeque<LineCommand>,
    events: Vec<LineEvent>,
    clock: Box<dyn Clock>,
    started_at: Duration,
}

impl<S: Scene> ProductionLine<S> {
    /// Build a line measured against real time. One unit is on the line
    /// immediately.
    pub fn new(config: LineConfig, scene: S) -> Self {
        Self::with_clock(config, scene, Box::new(WallClock::default()))
    }

    /// Build a line whose throughput statistics read `clock`.
    pub fn with_clock(config: LineConfig, scene: S, clock: Box<dyn Clock>) -> Self {
        let started_at = clock.now();
        let speed_multiplier = if config.initial_speed.is_finite() {
            clamp_speed(config.initial_speed)
        } else {
            tracing::warn!(
                initial_speed = config.initial_speed,
                "non-finite initial speed, using 1x"
            );
            1.0
        };
        let mut line = Self {
            world: World::new(),
            scene,
            conveyor: ConveyorBelt::from_config(&config),
            speed_multiplier,
            config,
            time: SimTime::default(),
            phase: LinePhase::default(),
            spawn_order: Vec::new(),
            next_unit_id: 0,
            completed_count: 0,
            active_stages: BTreeSet::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            clock,
            started_at,
        };

        tracing::info!(
            stations = line.conveyor.stations().len(),
            max_units = line.config.max_concurrent_units,
            speed = line.speed_multiplier,
            "production line started"
        );
        line.spawn_first_unit();
        line
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: LineCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = LineCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the line by `dt` seconds of caller time.
    ///
    /// Queued commands are applied first, even while paused. A paused line
    /// then does nothing: no unit moves, spawns or retires and simulation
    /// time stands still.
    pub fn update(&mut self, dt: f64) {
        self.events.clear();
        self.process_commands();

        if self.phase != LinePhase::Running {
            return;
        }

        if dt < 0.0 {
            tracing::warn!(dt, "negative frame delta treated as zero");
        }
        let dt = sanitize_delta(dt) * self.speed_multiplier;

        self.run_systems(dt);
        self.time.advance(dt);
    }

    /// [`update`](Self::update) followed by [`snapshot`](Self::snapshot).
    pub fn tick(&mut self, dt: f64) -> ProductionSnapshot {
        self.update(dt);
        self.snapshot()
    }

    /// Complete observable state. Events are those raised by the most recent
    /// update.
    pub fn snapshot(&self) -> ProductionSnapshot {
        systems::snapshot::build_snapshot::<S::Object>(
            &self.world,
            &self.spawn_order,
            &self.conveyor,
            self.time,
            self.phase,
            self.stats(),
            &self.active_stages,
            &self.events,
        )
    }

    /// Set the global speed multiplier, clamped to the supported range.
    /// Non-finite values are ignored.
    pub fn set_speed(&mut self, multiplier: f64) {
        if !multiplier.is_finite() {
            tracing::warn!(multiplier, "ignoring non-finite speed multiplier");
            return;
        }
        let clamped = clamp_speed(multiplier);
        if clamped != multiplier {
            tracing::warn!(requested = multiplier, applied = clamped, "speed clamped");
        }
        self.speed_multiplier = clamped;
        tracing::info!(speed = clamped, "speed changed");
    }

    /// Freeze or release the line. In-flight animations keep their progress.
    pub fn set_paused(&mut self, paused: bool) {
        let phase = if paused {
            LinePhase::Paused
        } else {
            LinePhase::Running
        };
        if phase != self.phase {
            tracing::info!(?phase, "line phase changed");
            self.phase = phase;
        }
    }

    /// Clear the line and start production over with one fresh unit.
    ///
    /// Counters and the throughput clock restart. The pause state and speed
    /// multiplier are kept, and unit ids keep counting up. Events raised
    /// before the reset are dropped.
    pub fn reset(&mut self) {
        self.events.clear();
        systems::cleanup::clear(&mut self.world, &mut self.spawn_order, &mut self.scene);
        self.completed_count = 0;
        self.active_stages.clear();
        self.time = SimTime::default();
        self.started_at = self.clock.now();
        self.events.push(LineEvent::ProductionReset);
        tracing::info!("production reset");

        self.spawn_first_unit();
    }

    /// Throughput statistics as of now.
    pub fn stats(&self) -> StatsView {
        let elapsed = self.clock.now().saturating_sub(self.started_at);
        let rates = stats::throughput(self.completed_count, elapsed);
        StatsView {
            completed_count: self.completed_count,
            in_progress_count: self.spawn_order.len() as u32,
            per_hour: rates.per_hour,
            per_day: rates.per_day,
            elapsed_secs: elapsed.as_secs_f64(),
            elapsed_time_formatted: stats::format_elapsed(elapsed),
            speed_multiplier: self.speed_multiplier,
        }
    }

    pub fn phase(&self) -> LinePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == LinePhase::Paused
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Simulation time. Only advances while running.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of units currently on the line.
    pub fn unit_count(&self) -> usize {
        self.spawn_order.len()
    }

    /// Stages under assembly as of the last update.
    pub fn active_stages(&self) -> &BTreeSet<u8> {
        &self.active_stages
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn conveyor(&self) -> &ConveyorBelt {
        &self.conveyor
    }

    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    /// Run `f` against the shell of `unit`, if it is still on the line.
    pub fn with_shell<T>(
        &self,
        unit: UnitId,
        f: impl FnOnce(&HouseShell<S::Object>) -> T,
    ) -> Option<T> {
        let entity = self.spawn_order.iter().copied().find(|&entity| {
            self.world
                .get::<&Unit>(entity)
                .is_ok_and(|found| found.id == unit)
        })?;
        let shell = self.world.get::<&HouseShell<S::Object>>(entity).ok()?;
        Some(f(&shell))
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: LineCommand) {
        match command {
            LineCommand::SetSpeed { multiplier } => self.set_speed(multiplier),
            LineCommand::Pause => self.set_paused(true),
            LineCommand::Resume => self.set_paused(false),
            LineCommand::TogglePause => self.set_paused(!self.is_paused()),
            LineCommand::Reset => self.reset(),
        }
    }

    /// Run all systems in order: advance, stations, retirement, spawning.
    fn run_systems(&mut self, dt: f64) {
        systems::movement::run::<S::Object>(
            &mut self.world,
            &self.spawn_order,
            dt,
            &mut self.events,
        );

        systems::assembly::run::<S::Object>(
            &mut self.world,
            &self.spawn_order,
            &self.conveyor,
            &mut self.active_stages,
            &mut self.events,
        );

        let retired = systems::cleanup::run(
            &mut self.world,
            &mut self.spawn_order,
            &self.conveyor,
            &mut self.scene,
            &mut self.events,
        );
        if retired > 0 {
            self.completed_count += retired;
            tracing::info!(completed = self.completed_count, "unit completed");
        }

        systems::spawner::run(
            &mut self.world,
            &mut self.spawn_order,
            &mut self.scene,
            &self.config,
            &mut self.next_unit_id,
            &mut self.events,
        );
    }

    fn spawn_first_unit(&mut self) {
        systems::spawner::spawn_unit(
            &mut self.world,
            &mut self.spawn_order,
            &mut self.scene,
            &self.config,
            &mut self.next_unit_id,
            &mut self.events,
        );
    }
}

fn clamp_speed(multiplier: f64) -> f64 {
    multiplier.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER)
}
