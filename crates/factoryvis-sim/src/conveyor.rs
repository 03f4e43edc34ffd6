//! The station track: fixed stations along the conveyor.

use factoryvis_core::config::LineConfig;

/// A point on the track where one stage is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub track_coordinate: f64,
    /// Stage produced here (1..=3).
    pub stage: u8,
    pub label: String,
}

/// Conveyor belt with its stations. Immutable once built.
///
/// Stations are expected to sit more than twice the tolerance apart so a
/// coordinate matches at most one of them; the config validator enforces
/// this for loaded layouts.
#[derive(Debug, Clone)]
pub struct ConveyorBelt {
    stations: Vec<Station>,
    tolerance: f64,
    length: f64,
    exit: f64,
}

impl Default for ConveyorBelt {
    fn default() -> Self {
        Self::from_config(&LineConfig::default())
    }
}

impl ConveyorBelt {
    pub fn new(stations: Vec<Station>, tolerance: f64, length: f64, exit: f64) -> Self {
        Self {
            stations,
            tolerance,
            length,
            exit,
        }
    }

    pub fn from_config(config: &LineConfig) -> Self {
        let stations = config
            .stations
            .iter()
            .map(|s| Station {
                track_coordinate: s.track_coordinate,
                stage: s.stage,
                label: s.label.clone(),
            })
            .collect();
        Self::new(
            stations,
            config.station_tolerance,
            config.track_length,
            config.track_exit,
        )
    }

    /// First station strictly within tolerance of `coordinate`.
    pub fn station_at(&self, coordinate: f64) -> Option<&Station> {
        self.stations
            .iter()
            .find(|station| (coordinate - station.track_coordinate).abs() < self.tolerance)
    }

    /// Whether a unit at `coordinate` has passed the end of the line.
    pub fn has_exited(&self, coordinate: f64) -> bool {
        coordinate < self.exit
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn exit(&self) -> f64 {
        self.exit
    }
}
