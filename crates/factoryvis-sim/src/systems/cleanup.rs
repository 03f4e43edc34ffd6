//! Cleanup system: retires units that have run off the end of the line.

use hecs::{Entity, World};

use factoryvis_core::components::Unit;
use factoryvis_core::events::LineEvent;

use crate::conveyor::ConveyorBelt;
use crate::house::HouseShell;
use crate::scene::Scene;

/// Despawn every unit past the exit, detach it from the scene and return how
/// many left the line.
pub fn run<S: Scene>(
    world: &mut World,
    order: &mut Vec<Entity>,
    conveyor: &ConveyorBelt,
    scene: &mut S,
    events: &mut Vec<LineEvent>,
) -> u32 {
    let mut retired = 0;

    for index in (0..order.len()).rev() {
        let entity = order[index];
        let Ok((unit, shell)) = world.query_one_mut::<(&Unit, &HouseShell<S::Object>)>(entity)
        else {
            continue;
        };
        if !conveyor.has_exited(shell.track_position()) {
            continue;
        }

        let (id, stage) = (unit.id, shell.stage());
        order.remove(index);
        let _ = world.despawn(entity);
        scene.remove(id);
        retired += 1;

        tracing::debug!(unit = %id, stage, "unit retired");
        events.push(LineEvent::UnitRetired { unit: id, stage });
    }

    retired
}

/// Despawn every unit regardless of position. Used by a production reset.
pub fn clear<S: Scene>(world: &mut World, order: &mut Vec<Entity>, scene: &mut S) {
    for entity in order.drain(..) {
        let id = world.get::<&Unit>(entity).map(|unit| unit.id);
        let _ = world.despawn(entity);
        if let Ok(id) = id {
            scene.remove(id);
        }
    }
}
