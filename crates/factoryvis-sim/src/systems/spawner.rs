//! Spawn system: feeds new units onto the line.

use hecs::{Entity, World};

use factoryvis_core::components::{ProcessedStages, Unit};
use factoryvis_core::config::LineConfig;
use factoryvis_core::events::LineEvent;
use factoryvis_core::types::UnitId;

use crate::house::{AssemblyTiming, HouseShell};
use crate::scene::Scene;

/// Spawn a unit if the line has capacity and the most recent unit has
/// cleared the spawn spacing.
pub fn run<S: Scene>(
    world: &mut World,
    order: &mut Vec<Entity>,
    scene: &mut S,
    config: &LineConfig,
    next_unit_id: &mut u32,
    events: &mut Vec<LineEvent>,
) -> Option<UnitId> {
    if order.len() >= config.max_concurrent_units {
        return None;
    }

    if let Some(&latest) = order.last() {
        let cleared = world
            .get::<&HouseShell<S::Object>>(latest)
            .map(|shell| shell.track_position() < -config.min_spawn_spacing)
            .unwrap_or(true);
        if !cleared {
            return None;
        }
    }

    Some(spawn_unit(world, order, scene, config, next_unit_id, events))
}

/// Spawn one unit at the track origin, attach it to the scene and append it
/// to the spawn order.
pub fn spawn_unit<S: Scene>(
    world: &mut World,
    order: &mut Vec<Entity>,
    scene: &mut S,
    config: &LineConfig,
    next_unit_id: &mut u32,
    events: &mut Vec<LineEvent>,
) -> UnitId {
    let id = UnitId(*next_unit_id);
    *next_unit_id = next_unit_id.wrapping_add(1);

    let parts = scene.add(id);
    let shell = HouseShell::new(parts, config.unit_speed, AssemblyTiming::from(config));
    let entity = world.spawn((Unit { id }, shell, ProcessedStages::default()));
    order.push(entity);

    tracing::debug!(unit = %id, active = order.len(), "unit spawned");
    events.push(LineEvent::UnitSpawned { unit: id });
    id
}
