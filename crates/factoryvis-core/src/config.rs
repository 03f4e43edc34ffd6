//! Line configuration: station layout, pacing and assembly timing.
//!
//! `LineConfig::default()` is the reference three-station layout. Custom
//! layouts are loaded from JSON and validated before the line is built;
//! runtime code trusts a validated config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating a [`LineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One station in the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub track_coordinate: f64,
    /// Stage produced at this station (1..=3).
    pub stage: u8,
    pub label: String,
}

/// Configuration for building a production line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Unit travel speed at 1x (units per second).
    pub unit_speed: f64,
    pub max_concurrent_units: usize,
    /// Distance the most recent unit must cover before the next spawn.
    pub min_spawn_spacing: f64,
    /// Track coordinate past which units retire.
    pub track_exit: f64,
    pub track_length: f64,
    pub station_tolerance: f64,
    pub assembly_duration_secs: f64,
    pub assembly_buffer_secs: f64,
    /// Speed multiplier the line starts with.
    pub initial_speed: f64,
    pub stations: Vec<StationConfig>,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            unit_speed: UNIT_SPEED,
            max_concurrent_units: MAX_CONCURRENT_UNITS,
            min_spawn_spacing: MIN_SPAWN_SPACING,
            track_exit: TRACK_EXIT,
            track_length: TRACK_LENGTH,
            station_tolerance: STATION_TOLERANCE,
            assembly_duration_secs: ASSEMBLY_ANIMATION_SECS,
            assembly_buffer_secs: ASSEMBLY_BUFFER_SECS,
            initial_speed: 1.0,
            stations: REFERENCE_STATIONS
                .iter()
                .map(|&(track_coordinate, stage, label)| StationConfig {
                    track_coordinate,
                    stage,
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}

impl LineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Total time a unit spends stopped at one station.
    pub fn station_dwell_secs(&self) -> f64 {
        self.assembly_duration_secs + self.assembly_buffer_secs
    }

    /// Check the layout and timing invariants the scheduler relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if !(self.unit_speed > 0.0) {
            return invalid(format!("unit_speed must be > 0, got {}", self.unit_speed));
        }
        if self.max_concurrent_units == 0 {
            return invalid("max_concurrent_units must be at least 1".into());
        }
        if !(self.min_spawn_spacing >= 0.0) {
            return invalid(format!(
                "min_spawn_spacing must be >= 0, got {}",
                self.min_spawn_spacing
            ));
        }
        if !(self.station_tolerance > 0.0) {
            return invalid(format!(
                "station_tolerance must be > 0, got {}",
                self.station_tolerance
            ));
        }
        if !(self.assembly_duration_secs > 0.0) {
            return invalid(format!(
                "assembly_duration_secs must be > 0, got {}",
                self.assembly_duration_secs
            ));
        }
        if !(self.assembly_buffer_secs >= 0.0) {
            return invalid(format!(
                "assembly_buffer_secs must be >= 0, got {}",
                self.assembly_buffer_secs
            ));
        }
        if !(self.track_exit < 0.0) {
            return invalid(format!("track_exit must be < 0, got {}", self.track_exit));
        }
        if !(MIN_SPEED_MULTIPLIER..=MAX_SPEED_MULTIPLIER).contains(&self.initial_speed) {
            return invalid(format!(
                "initial_speed must be within {MIN_SPEED_MULTIPLIER}..={MAX_SPEED_MULTIPLIER}, got {}",
                self.initial_speed
            ));
        }
        if self.stations.is_empty() {
            return invalid("at least one station is required".into());
        }

        for station in &self.stations {
            if !(1..=STAGE_COMPLETE).contains(&station.stage) {
                return invalid(format!(
                    "station '{}' produces stage {}, expected 1..={STAGE_COMPLETE}",
                    station.label, station.stage
                ));
            }
            let z = station.track_coordinate;
            if !(z < 0.0 && z > self.track_exit) {
                return invalid(format!(
                    "station '{}' at {z} lies outside the track (0, {})",
                    station.label, self.track_exit
                ));
            }
        }

        let mut coords: Vec<f64> = self.stations.iter().map(|s| s.track_coordinate).collect();
        coords.sort_by(f64::total_cmp);
        let min_gap = 2.0 * self.station_tolerance;
        for pair in coords.windows(2) {
            if pair[1] - pair[0] <= min_gap {
                return invalid(format!(
                    "stations at {} and {} are closer than {min_gap}",
                    pair[0], pair[1]
                ));
            }
        }

        Ok(())
    }
}
