//! Fundamental geometric and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use glam::DVec3;

/// Opaque handle for a production unit. Assigned sequentially at spawn and
/// never reused within one production run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Simulation time tracking.
///
/// Only advances while the line is running, and only by the scaled delta
/// actually applied to the units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that advanced the simulation.
    pub tick: u64,
    /// Elapsed simulation time in seconds (speed multiplier applied).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` simulated seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Clamp a caller-supplied delta to a usable, non-negative step.
///
/// Negative and non-finite deltas become a zero-progress tick.
pub fn sanitize_delta(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}
