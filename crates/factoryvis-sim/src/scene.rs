//! The scene container the production line attaches units to.
//!
//! Building geometry and materials is the renderer's business; the line only
//! asks the scene for a unit's renderable parts on spawn and tells it to drop
//! them on retirement.

use std::collections::BTreeSet;

use glam::DVec3;

use factoryvis_anim::{Renderable, SceneObject};
use factoryvis_core::enums::ComponentSlot;
use factoryvis_core::types::UnitId;

/// Renderable parts of one house shell.
///
/// `group` carries the unit along the track; the component parts sit at
/// their resting positions relative to it.
#[derive(Debug, Clone)]
pub struct ShellParts<R> {
    pub group: R,
    pub frame: R,
    pub walls: R,
    pub roof: R,
}

/// Receives unit lifecycle calls from the production line.
///
/// The line calls [`add`](Scene::add) exactly once per spawn and
/// [`remove`](Scene::remove) exactly once per retirement.
pub trait Scene {
    type Object: Renderable + Send + Sync + 'static;

    /// Attach a new unit and hand back its parts.
    fn add(&mut self, unit: UnitId) -> ShellParts<Self::Object>;

    /// Detach a unit that left the line.
    fn remove(&mut self, unit: UnitId);
}

/// Scene without a renderer. Keeps track of which units are attached.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    attached: BTreeSet<UnitId>,
    added: u64,
    removed: u64,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached(&self) -> &BTreeSet<UnitId> {
        &self.attached
    }

    /// Total `add` calls so far.
    pub fn added(&self) -> u64 {
        self.added
    }

    /// Total `remove` calls so far.
    pub fn removed(&self) -> u64 {
        self.removed
    }
}

impl Scene for HeadlessScene {
    type Object = SceneObject;

    fn add(&mut self, unit: UnitId) -> ShellParts<SceneObject> {
        self.added += 1;
        self.attached.insert(unit);
        ShellParts {
            group: SceneObject::at(DVec3::ZERO),
            frame: SceneObject::at(ComponentSlot::Frame.rest_position()),
            walls: SceneObject::at(ComponentSlot::Walls.rest_position()),
            roof: SceneObject::at(ComponentSlot::Roof.rest_position()),
        }
    }

    fn remove(&mut self, unit: UnitId) {
        self.removed += 1;
        self.attached.remove(&unit);
    }
}
