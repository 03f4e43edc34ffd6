//! Advance system: steps every unit's assembly and conveyor motion.

use hecs::{Entity, World};

use factoryvis_anim::Renderable;
use factoryvis_core::components::Unit;
use factoryvis_core::events::LineEvent;

use crate::house::HouseShell;

/// Advance all units by `dt` simulated seconds.
pub fn run<R>(world: &mut World, order: &[Entity], dt: f64, events: &mut Vec<LineEvent>)
where
    R: Renderable + Send + Sync + 'static,
{
    for &entity in order.iter().rev() {
        let Ok((unit, shell)) = world.query_one_mut::<(&Unit, &mut HouseShell<R>)>(entity) else {
            continue;
        };

        if let Some(stage) = shell.update(dt) {
            tracing::debug!(unit = %unit.id, stage, "stage completed");
            events.push(LineEvent::StageCompleted {
                unit: unit.id,
                stage,
            });
        }
    }
}
