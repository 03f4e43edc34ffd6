//! Operator commands sent from a dashboard to the production line.
//!
//! Commands are queued and processed at the next tick boundary, even while
//! the line is paused.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LineCommand {
    /// Set the global speed multiplier (clamped to the allowed range).
    SetSpeed { multiplier: f64 },
    /// Freeze the line.
    Pause,
    /// Unfreeze the line.
    Resume,
    /// Flip between paused and running.
    TogglePause,
    /// Clear all units and statistics, then start over with one fresh unit.
    Reset,
}
