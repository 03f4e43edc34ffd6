//! Production line constants and tuning parameters.

use crate::types::DVec3;

/// Runner tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the runner's tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Stages ---

/// Stage of a freshly spawned unit: nothing visible.
pub const STAGE_EMPTY: u8 = 0;

/// Stage of a finished unit: frame, walls and roof in place.
pub const STAGE_COMPLETE: u8 = 3;

// --- Component animation offsets ---

/// Vertical offset for components that rise from below the floor.
pub const RISE_OFFSET: DVec3 = DVec3::new(0.0, -15.0, 0.0);

/// Vertical offset for components dropped from above.
pub const DROP_OFFSET: DVec3 = DVec3::new(0.0, 15.0, 0.0);

/// Lateral offset for components sliding in from the left.
pub const SLIDE_LEFT_OFFSET: DVec3 = DVec3::new(-20.0, 0.0, 0.0);

/// Lateral offset for components sliding in from the right.
pub const SLIDE_RIGHT_OFFSET: DVec3 = DVec3::new(20.0, 0.0, 0.0);

/// Depth offset for components sliding in from the back.
pub const SLIDE_IN_OFFSET: DVec3 = DVec3::new(0.0, 0.0, -15.0);

// --- Assembly ---

/// Duration of one component's assembly animation (seconds).
pub const ASSEMBLY_ANIMATION_SECS: f64 = 1.8;

/// Extra time a unit stays at a station after its animation (seconds).
/// Guarantees the animation has landed before the unit moves on.
pub const ASSEMBLY_BUFFER_SECS: f64 = 0.3;

/// Default duration for a component animation started without an explicit one.
pub const DEFAULT_COMPONENT_ANIMATION_SECS: f64 = 1.5;

// --- Conveyor ---

/// Unit travel speed along the conveyor (units per second).
pub const UNIT_SPEED: f64 = 5.0;

/// Conveyor length (units). The belt starts at the origin and runs toward -Z.
pub const TRACK_LENGTH: f64 = 100.0;

/// Track coordinate past which a unit leaves the line.
pub const TRACK_EXIT: f64 = -100.0;

/// Distance within which a unit counts as being at a station.
pub const STATION_TOLERANCE: f64 = 1.0;

/// Reference station layout: (track coordinate, stage produced, label).
pub const REFERENCE_STATIONS: [(f64, u8, &str); 3] = [
    (-20.0, 1, "Frame Assembly"),
    (-50.0, 2, "Walls Assembly"),
    (-80.0, 3, "Roof Assembly"),
];

// --- Scheduler ---

/// Maximum number of units on the line at once.
pub const MAX_CONCURRENT_UNITS: usize = 3;

/// Distance the most recent unit must travel before the next one spawns.
pub const MIN_SPAWN_SPACING: f64 = 25.0;

/// Slowest allowed speed multiplier.
pub const MIN_SPEED_MULTIPLIER: f64 = 0.1;

/// Fastest allowed speed multiplier.
pub const MAX_SPEED_MULTIPLIER: f64 = 5.0;

// --- Shell geometry ---

/// Shell height; frame and walls rest centred on it, the roof caps it.
pub const SHELL_HEIGHT: f64 = 8.0;

/// Thickness of the roof cap.
pub const ROOF_THICKNESS: f64 = 0.5;

// --- Statistics ---

/// Seconds per hour, for throughput rates.
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Projection window for the per-day rate (hours).
pub const HOURS_PER_DAY: f64 = 24.0;
