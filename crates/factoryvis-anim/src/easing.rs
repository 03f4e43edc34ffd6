//! Easing curves.
//!
//! Each curve maps normalized progress `t` in `[0, 1]` to eased progress.
//! Overshooting curves (back, bounce) leave `[0, 1]` transiently but land
//! exactly on `0` and `1` at the ends.

use serde::{Deserialize, Serialize};

/// A stateless easing curve. Plain function pointers, so one curve can be
/// shared by any number of interpolators.
pub type EasingFn = fn(f64) -> f64;

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Overshoots past 1 and settles back, like a part snapping into place.
pub fn ease_out_back(t: f64) -> f64 {
    // c1 and c3 do not cancel exactly in floating point
    if t <= 0.0 {
        return 0.0;
    }
    let u = t - 1.0;
    1.0 + BACK_C3 * u.powi(3) + BACK_C1 * u.powi(2)
}

/// Four shrinking parabolic hops that settle on 1.
pub fn ease_out_bounce(t: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Named easing curves, for selecting a curve from data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutExpo,
    EaseOutBack,
    EaseOutBounce,
}

impl Easing {
    /// Every curve, in declaration order.
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseOutExpo,
        Easing::EaseOutBack,
        Easing::EaseOutBounce,
    ];

    /// The curve's function pointer.
    pub fn as_fn(self) -> EasingFn {
        match self {
            Easing::Linear => linear,
            Easing::EaseInQuad => ease_in_quad,
            Easing::EaseOutQuad => ease_out_quad,
            Easing::EaseInOutQuad => ease_in_out_quad,
            Easing::EaseInCubic => ease_in_cubic,
            Easing::EaseOutCubic => ease_out_cubic,
            Easing::EaseInOutCubic => ease_in_out_cubic,
            Easing::EaseOutExpo => ease_out_expo,
            Easing::EaseOutBack => ease_out_back,
            Easing::EaseOutBounce => ease_out_bounce,
        }
    }

    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        (self.as_fn())(t)
    }
}
