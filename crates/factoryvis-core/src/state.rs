//! Production snapshot: the complete observable state handed to a dashboard
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::LinePhase;
use crate::events::LineEvent;
use crate::types::{SimTime, UnitId};

/// Complete line state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionSnapshot {
    pub time: SimTime,
    pub phase: LinePhase,
    pub stats: StatsView,
    /// Active units, oldest first.
    pub units: Vec<UnitView>,
    pub stations: Vec<StationView>,
    /// Stages currently under active assembly, ascending.
    pub active_stages: Vec<u8>,
    pub events: Vec<LineEvent>,
}

/// Throughput statistics for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub completed_count: u32,
    pub in_progress_count: u32,
    pub per_hour: f64,
    pub per_day: f64,
    /// Wall-clock seconds since the line (re)started.
    pub elapsed_secs: f64,
    /// Wall-clock elapsed time, e.g. `"1h 02m 05s"`.
    pub elapsed_time_formatted: String,
    pub speed_multiplier: f64,
}

/// One unit on the conveyor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub track_position: f64,
    pub stage: u8,
    pub target_stage: u8,
    pub assembling: bool,
    /// Progress through the current assembly (0.0 - 1.0), 0 when idle.
    pub assembly_progress: f64,
}

/// One station along the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationView {
    pub label: String,
    pub track_coordinate: f64,
    pub stage: u8,
    /// Whether a unit is assembling this station's stage right now.
    pub active: bool,
}
