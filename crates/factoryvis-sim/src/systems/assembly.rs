//! Station system: detects units arriving at stations and starts assembly.

use std::collections::BTreeSet;

use hecs::{Entity, World};

use factoryvis_anim::Renderable;
use factoryvis_core::components::{ProcessedStages, Unit};
use factoryvis_core::events::LineEvent;

use crate::conveyor::ConveyorBelt;
use crate::house::HouseShell;

/// Record stages under assembly into `active_stages` and start assembly for
/// units standing at a station whose stage they still need.
///
/// A stage is triggered at most once per unit for the unit's whole life.
pub fn run<R>(
    world: &mut World,
    order: &[Entity],
    conveyor: &ConveyorBelt,
    active_stages: &mut BTreeSet<u8>,
    events: &mut Vec<LineEvent>,
) where
    R: Renderable + Send + Sync + 'static,
{
    active_stages.clear();

    for &entity in order.iter().rev() {
        let Ok((unit, shell, processed)) = world
            .query_one_mut::<(&Unit, &mut HouseShell<R>, &mut ProcessedStages)>(entity)
        else {
            continue;
        };

        if shell.is_assembling() {
            active_stages.insert(shell.target_stage());
            continue;
        }

        let Some(station) = conveyor.station_at(shell.track_position()) else {
            continue;
        };
        if processed.stages.contains(&station.stage) || station.stage <= shell.stage() {
            continue;
        }

        if shell.start_assembly(station.stage) {
            processed.stages.insert(station.stage);
            tracing::debug!(
                unit = %unit.id,
                station = %station.label,
                stage = station.stage,
                "assembly started"
            );
            events.push(LineEvent::AssemblyStarted {
                unit: unit.id,
                stage: station.stage,
            });
        }
    }
}
