//! Component animation: moves one renderable part from an offset start
//! position into its resting position.

use glam::DVec3;

use factoryvis_core::enums::AnimationKind;

use crate::easing::EasingFn;
use crate::renderable::Renderable;
use crate::tween::AnimatedVector3;

/// Drives one part of a shell into place.
///
/// The part's position at construction is its resting (final) position; the
/// start position is derived from the [`AnimationKind`] offset. A new
/// animation hides its part until [`start`](Self::start) or
/// [`complete`](Self::complete) is called.
#[derive(Debug, Clone)]
pub struct ComponentAnimation<R: Renderable> {
    object: R,
    kind: AnimationKind,
    final_position: DVec3,
    start_position: DVec3,
    tween: Option<AnimatedVector3>,
    active: bool,
    complete: bool,
}

impl<R: Renderable> ComponentAnimation<R> {
    pub fn new(mut object: R, kind: AnimationKind) -> Self {
        let final_position = object.position();
        object.set_visible(false);
        Self {
            object,
            kind,
            final_position,
            start_position: final_position + kind.offset(),
            tween: None,
            active: false,
            complete: false,
        }
    }

    /// Show the part at its start position and begin easing it home.
    ///
    /// Returns `false` without touching anything if the animation is already
    /// running or finished.
    pub fn start(&mut self, duration: f64, easing: EasingFn) -> bool {
        if self.active || self.complete {
            return false;
        }

        self.object.set_position(self.start_position);
        self.object.set_visible(true);
        self.tween = Some(AnimatedVector3::new(
            self.start_position,
            self.final_position,
            duration,
            easing,
        ));
        self.active = true;
        tracing::trace!(kind = ?self.kind, duration, "component animation started");
        true
    }

    /// Advance a running animation by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if !self.active {
            return;
        }
        let Some(tween) = self.tween.as_mut() else {
            return;
        };

        let position = tween.update(dt);
        self.object.set_position(position);

        if tween.is_complete() {
            self.complete = true;
            self.active = false;
            self.object.set_position(self.final_position);
        }
    }

    /// Jump straight to the finished state without animating.
    pub fn complete(&mut self) {
        self.active = false;
        self.complete = true;
        self.object.set_visible(true);
        self.object.set_position(self.final_position);
    }

    /// Hide the part and return it to its start position so a later
    /// [`start`](Self::start) replays identically.
    pub fn reset(&mut self) {
        self.active = false;
        self.complete = false;
        self.tween = None;
        self.object.set_visible(false);
        self.object.set_position(self.start_position);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn final_position(&self) -> DVec3 {
        self.final_position
    }

    pub fn start_position(&self) -> DVec3 {
        self.start_position
    }

    /// Normalized progress of the running animation (1.0 once complete).
    pub fn progress(&self) -> f64 {
        if self.complete {
            return 1.0;
        }
        self.tween.as_ref().map_or(0.0, |tween| tween.progress())
    }

    pub fn object(&self) -> &R {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut R {
        &mut self.object
    }
}
