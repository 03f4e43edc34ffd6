//! House shell: one production unit and its assembly state machine.
//!
//! A shell is `Idle(stage)` or `Assembling(stage -> target)`. Assembling
//! stops the shell on the conveyor; committing the target stage releases
//! it. Stage 0 shows nothing, 1 the frame, 2 frame and walls, 3 the
//! finished house.

use glam::DVec3;

use factoryvis_anim::{ComponentAnimation, Easing, Renderable};
use factoryvis_core::config::LineConfig;
use factoryvis_core::constants::*;
use factoryvis_core::enums::ComponentSlot;
use factoryvis_core::types::sanitize_delta;

use crate::scene::ShellParts;

/// Curve for the component a stage adds: the frame eases in, the walls
/// snap into place with an overshoot, the roof settles with a bounce.
pub fn stage_easing(stage: u8) -> Easing {
    match stage {
        2 => Easing::EaseOutBack,
        3 => Easing::EaseOutBounce,
        _ => Easing::EaseOutCubic,
    }
}

/// How long a shell animates and dwells at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyTiming {
    /// Component animation duration (seconds).
    pub animation_secs: f64,
    /// Dwell after the animation before the shell moves on (seconds).
    pub buffer_secs: f64,
}

impl Default for AssemblyTiming {
    fn default() -> Self {
        Self {
            animation_secs: ASSEMBLY_ANIMATION_SECS,
            buffer_secs: ASSEMBLY_BUFFER_SECS,
        }
    }
}

impl From<&LineConfig> for AssemblyTiming {
    fn from(config: &LineConfig) -> Self {
        Self {
            animation_secs: config.assembly_duration_secs,
            buffer_secs: config.assembly_buffer_secs,
        }
    }
}

/// The three component animations of a shell, one fixed slot each.
#[derive(Debug, Clone)]
pub struct ShellComponents<R: Renderable> {
    pub frame: ComponentAnimation<R>,
    pub walls: ComponentAnimation<R>,
    pub roof: ComponentAnimation<R>,
}

impl<R: Renderable> ShellComponents<R> {
    pub fn get(&self, slot: ComponentSlot) -> &ComponentAnimation<R> {
        match slot {
            ComponentSlot::Frame => &self.frame,
            ComponentSlot::Walls => &self.walls,
            ComponentSlot::Roof => &self.roof,
        }
    }

    pub fn get_mut(&mut self, slot: ComponentSlot) -> &mut ComponentAnimation<R> {
        match slot {
            ComponentSlot::Frame => &mut self.frame,
            ComponentSlot::Walls => &mut self.walls,
            ComponentSlot::Roof => &mut self.roof,
        }
    }

    fn for_each_mut(&mut self, mut f: impl FnMut(ComponentSlot, &mut ComponentAnimation<R>)) {
        f(ComponentSlot::Frame, &mut self.frame);
        f(ComponentSlot::Walls, &mut self.walls);
        f(ComponentSlot::Roof, &mut self.roof);
    }
}

/// One house moving down the line.
#[derive(Debug, Clone)]
pub struct HouseShell<R: Renderable> {
    group: R,
    components: ShellComponents<R>,
    timing: AssemblyTiming,
    /// Travel speed along the track (units per second).
    speed: f64,
    track_position: f64,
    stage: u8,
    target_stage: u8,
    assembling: bool,
    assembly_timer: f64,
    assembly_duration: f64,
    movement_paused: bool,
}

impl<R: Renderable> HouseShell<R> {
    /// Build a shell at the track origin with every component hidden.
    pub fn new(parts: ShellParts<R>, speed: f64, timing: AssemblyTiming) -> Self {
        let ShellParts {
            mut group,
            frame,
            walls,
            roof,
        } = parts;

        let origin = group.position();
        group.set_position(DVec3::new(origin.x, origin.y, 0.0));

        Self {
            group,
            components: ShellComponents {
                frame: ComponentAnimation::new(frame, ComponentSlot::Frame.animation_kind()),
                walls: ComponentAnimation::new(walls, ComponentSlot::Walls.animation_kind()),
                roof: ComponentAnimation::new(roof, ComponentSlot::Roof.animation_kind()),
            },
            timing,
            speed,
            track_position: 0.0,
            stage: STAGE_EMPTY,
            target_stage: STAGE_EMPTY,
            assembling: false,
            assembly_timer: 0.0,
            assembly_duration: 0.0,
            movement_paused: false,
        }
    }

    /// Begin assembling up to `target_stage`.
    ///
    /// Refused (returns `false`, nothing changes) while already assembling or
    /// when the target is not beyond the current stage. Components of any
    /// skipped stages snap into place; only the target's component animates.
    pub fn start_assembly(&mut self, target_stage: u8) -> bool {
        if self.assembling || target_stage <= self.stage {
            return false;
        }
        let Some(slot) = ComponentSlot::for_stage(target_stage) else {
            return false;
        };

        for skipped in (self.stage + 1)..target_stage {
            if let Some(skipped_slot) = ComponentSlot::for_stage(skipped) {
                self.components.get_mut(skipped_slot).complete();
            }
        }

        let easing = stage_easing(target_stage).as_fn();
        self.components
            .get_mut(slot)
            .start(self.timing.animation_secs, easing);

        self.target_stage = target_stage;
        self.assembling = true;
        self.assembly_timer = 0.0;
        self.assembly_duration = self.timing.animation_secs + self.timing.buffer_secs;
        self.movement_paused = true;
        true
    }

    /// Advance component animations and the assembly timer.
    ///
    /// Returns the committed stage on the tick the assembly finishes.
    pub fn update_assembly(&mut self, dt: f64) -> Option<u8> {
        let dt = sanitize_delta(dt);
        if !self.assembling {
            return None;
        }

        self.components.for_each_mut(|_, animation| animation.update(dt));
        self.assembly_timer += dt;

        if self.assembly_timer >= self.assembly_duration {
            self.stage = self.target_stage;
            self.assembling = false;
            self.assembly_timer = 0.0;
            self.movement_paused = false;
            return Some(self.stage);
        }
        None
    }

    /// One simulation step: assembly first, then conveyor motion unless
    /// stopped at a station.
    pub fn update(&mut self, dt: f64) -> Option<u8> {
        let committed = self.update_assembly(dt);
        let dt = sanitize_delta(dt);

        if !self.movement_paused {
            self.track_position -= self.speed * dt;
            let group = self.group.position();
            self.group
                .set_position(DVec3::new(group.x, group.y, self.track_position));
        }

        committed
    }

    /// Materialize `stage` instantly, without animation.
    ///
    /// Cancels any assembly in progress. Components up to `stage` are shown
    /// in place; the rest are hidden and rewound.
    pub fn set_stage(&mut self, stage: u8) {
        let stage = stage.min(STAGE_COMPLETE);
        self.components.for_each_mut(|slot, animation| {
            if slot.stage() <= stage {
                animation.complete();
            } else {
                animation.reset();
            }
        });

        self.stage = stage;
        self.target_stage = stage;
        self.assembling = false;
        self.assembly_timer = 0.0;
        self.movement_paused = false;
    }

    /// Back to stage 0 with every timer, flag and component animation
    /// cleared. The track position is left alone.
    pub fn reset_state(&mut self) {
        self.components.for_each_mut(|_, animation| animation.reset());
        self.stage = STAGE_EMPTY;
        self.target_stage = STAGE_EMPTY;
        self.assembling = false;
        self.assembly_timer = 0.0;
        self.assembly_duration = 0.0;
        self.movement_paused = false;
    }

    pub fn stage(&self) -> u8 {
        self.stage
    }

    pub fn target_stage(&self) -> u8 {
        self.target_stage
    }

    pub fn is_assembling(&self) -> bool {
        self.assembling
    }

    pub fn is_movement_paused(&self) -> bool {
        self.movement_paused
    }

    pub fn is_complete(&self) -> bool {
        self.stage >= STAGE_COMPLETE
    }

    pub fn track_position(&self) -> f64 {
        self.track_position
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn assembly_timer(&self) -> f64 {
        self.assembly_timer
    }

    pub fn assembly_duration(&self) -> f64 {
        self.assembly_duration
    }

    /// Fraction of the current assembly dwell elapsed; 0 when idle.
    pub fn assembly_progress(&self) -> f64 {
        if !self.assembling || self.assembly_duration <= 0.0 {
            return 0.0;
        }
        (self.assembly_timer / self.assembly_duration).clamp(0.0, 1.0)
    }

    pub fn component(&self, slot: ComponentSlot) -> &ComponentAnimation<R> {
        self.components.get(slot)
    }

    pub fn group(&self) -> &R {
        &self.group
    }
}
