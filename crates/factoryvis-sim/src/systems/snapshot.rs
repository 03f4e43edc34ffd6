//! Snapshot system: reads the unit world and builds a `ProductionSnapshot`.
//!
//! This system is read-only. It never modifies the world.

use std::collections::BTreeSet;

use hecs::{Entity, World};

use factoryvis_anim::Renderable;
use factoryvis_core::components::Unit;
use factoryvis_core::enums::LinePhase;
use factoryvis_core::events::LineEvent;
use factoryvis_core::state::*;
use factoryvis_core::types::SimTime;

use crate::conveyor::ConveyorBelt;
use crate::house::HouseShell;

/// Build a complete snapshot from the current line state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot<R>(
    world: &World,
    order: &[Entity],
    conveyor: &ConveyorBelt,
    time: SimTime,
    phase: LinePhase,
    stats: StatsView,
    active_stages: &BTreeSet<u8>,
    events: &[LineEvent],
) -> ProductionSnapshot
where
    R: Renderable + Send + Sync + 'static,
{
    ProductionSnapshot {
        time,
        phase,
        stats,
        units: build_units::<R>(world, order),
        stations: build_stations(conveyor, active_stages),
        active_stages: active_stages.iter().copied().collect(),
        events: events.to_vec(),
    }
}

/// Unit views, oldest first.
fn build_units<R>(world: &World, order: &[Entity]) -> Vec<UnitView>
where
    R: Renderable + Send + Sync + 'static,
{
    order
        .iter()
        .filter_map(|&entity| {
            let unit = world.get::<&Unit>(entity).ok()?;
            let shell = world.get::<&HouseShell<R>>(entity).ok()?;
            Some(UnitView {
                id: unit.id,
                track_position: shell.track_position(),
                stage: shell.stage(),
                target_stage: shell.target_stage(),
                assembling: shell.is_assembling(),
                assembly_progress: shell.assembly_progress(),
            })
        })
        .collect()
}

fn build_stations(conveyor: &ConveyorBelt, active_stages: &BTreeSet<u8>) -> Vec<StationView> {
    conveyor
        .stations()
        .iter()
        .map(|station| StationView {
            label: station.label.clone(),
            track_coordinate: station.track_coordinate,
            stage: station.stage,
            active: active_stages.contains(&station.stage),
        })
        .collect()
}
