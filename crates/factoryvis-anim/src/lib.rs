//! Animation engine for FactoryVis.
//!
//! Easing curves, timed interpolation, and component animations that move a
//! renderable part from an offset start into its resting position.
//! No ECS dependency: operates on plain data and the [`Renderable`] trait.

pub mod component;
pub mod easing;
pub mod renderable;
pub mod sequence;
pub mod tween;

pub use component::ComponentAnimation;
pub use easing::{Easing, EasingFn};
pub use factoryvis_core as core;
pub use renderable::{Renderable, SceneObject};
pub use sequence::{AnimationSequence, SequenceMode};
pub use tween::{AnimatedValue, AnimatedVector3, Lerp, Tween};

#[cfg(test)]
mod tests;
