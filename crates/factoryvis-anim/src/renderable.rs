//! The narrow interface the animation engine needs from a rendered object.

use glam::DVec3;

/// Anything with a mutable position and a visibility flag.
///
/// The production line only ever reads and writes these two properties;
/// geometry and materials belong to the renderer.
pub trait Renderable {
    fn position(&self) -> DVec3;
    fn set_position(&mut self, position: DVec3);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

/// Plain position/visibility pair, used by headless scenes and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneObject {
    pub position: DVec3,
    pub visible: bool,
}

impl SceneObject {
    /// A visible object at `position`.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            visible: true,
        }
    }
}

impl Renderable for SceneObject {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
