//! Enumeration types used throughout the production line.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::DVec3;

/// How a component travels into its resting position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// Rises from below the floor.
    Rise,
    /// Drops from above.
    Drop,
    /// Slides in from the left.
    SlideLeft,
    /// Slides in from the right.
    SlideRight,
    /// Slides in from the back.
    SlideIn,
    /// Appears in place.
    #[default]
    None,
}

impl AnimationKind {
    /// Offset from the resting position to the animation's start position.
    pub fn offset(self) -> DVec3 {
        match self {
            AnimationKind::Rise => RISE_OFFSET,
            AnimationKind::Drop => DROP_OFFSET,
            AnimationKind::SlideLeft => SLIDE_LEFT_OFFSET,
            AnimationKind::SlideRight => SLIDE_RIGHT_OFFSET,
            AnimationKind::SlideIn => SLIDE_IN_OFFSET,
            AnimationKind::None => DVec3::ZERO,
        }
    }
}

/// The three component slots of a house shell, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentSlot {
    Frame,
    Walls,
    Roof,
}

impl ComponentSlot {
    /// All slots in assembly order.
    pub const ALL: [ComponentSlot; 3] = [
        ComponentSlot::Frame,
        ComponentSlot::Walls,
        ComponentSlot::Roof,
    ];

    /// The slot whose component a stage adds, if any.
    pub fn for_stage(stage: u8) -> Option<ComponentSlot> {
        match stage {
            1 => Some(ComponentSlot::Frame),
            2 => Some(ComponentSlot::Walls),
            3 => Some(ComponentSlot::Roof),
            _ => None,
        }
    }

    /// The stage reached once this slot's component is in place.
    pub fn stage(self) -> u8 {
        match self {
            ComponentSlot::Frame => 1,
            ComponentSlot::Walls => 2,
            ComponentSlot::Roof => 3,
        }
    }

    /// How this slot's component enters the shell.
    pub fn animation_kind(self) -> AnimationKind {
        match self {
            ComponentSlot::Frame => AnimationKind::Rise,
            ComponentSlot::Walls => AnimationKind::SlideLeft,
            ComponentSlot::Roof => AnimationKind::Drop,
        }
    }

    /// Resting position of the component relative to the shell origin.
    pub fn rest_position(self) -> DVec3 {
        match self {
            ComponentSlot::Frame | ComponentSlot::Walls => DVec3::new(0.0, SHELL_HEIGHT / 2.0, 0.0),
            ComponentSlot::Roof => DVec3::new(0.0, SHELL_HEIGHT + ROOF_THICKNESS / 2.0, 0.0),
        }
    }
}

/// Whether the line is advancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinePhase {
    #[default]
    Running,
    Paused,
}
