//! ECS components attached to every unit on the line.
//!
//! Components are plain data. The assembly state machine itself
//! (`HouseShell`) lives in the sim crate because it owns renderables.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// Identity of a production unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
}

/// Stages a unit has already been sent to assemble.
///
/// Lives exactly as long as the unit's entity, so a stage can never be
/// triggered twice for one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedStages {
    pub stages: BTreeSet<u8>,
}
