//! Lifecycle events emitted by the production line each tick.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// Something that happened on the line during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LineEvent {
    /// A new unit entered the line at the origin.
    UnitSpawned { unit: UnitId },
    /// A unit stopped at a station and began assembling.
    AssemblyStarted { unit: UnitId, stage: u8 },
    /// A unit committed a stage and resumed moving.
    StageCompleted { unit: UnitId, stage: u8 },
    /// A unit passed the exit and left the line.
    UnitRetired { unit: UnitId, stage: u8 },
    /// The line was cleared and restarted.
    ProductionReset,
}
