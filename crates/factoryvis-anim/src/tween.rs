//! Timed interpolation from a start value to an end value.

use glam::DVec3;

use factoryvis_core::types::sanitize_delta;

use crate::easing::{ease_out_cubic, EasingFn};

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp_to(self, end: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp_to(self, end: Self, t: f64) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for DVec3 {
    fn lerp_to(self, end: Self, t: f64) -> Self {
        self + (end - self) * t
    }
}

/// Eases a value from `start` to `end` over `duration` seconds.
///
/// Once complete, the tween reports exactly `end` regardless of how the
/// easing curve behaves near `t = 1`.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    start: T,
    end: T,
    duration: f64,
    elapsed: f64,
    easing: EasingFn,
    complete: bool,
}

/// Scalar tween.
pub type AnimatedValue = Tween<f64>;

/// Position tween.
pub type AnimatedVector3 = Tween<DVec3>;

impl<T: Lerp> Tween<T> {
    pub fn new(start: T, end: T, duration: f64, easing: EasingFn) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            easing,
            complete: false,
        }
    }

    /// Tween with the default ease-out-cubic curve.
    pub fn ease_out(start: T, end: T, duration: f64) -> Self {
        Self::new(start, end, duration, ease_out_cubic)
    }

    /// Advance by `dt` seconds and return the current value.
    ///
    /// Negative deltas count as zero. A non-positive duration completes on
    /// the first update.
    pub fn update(&mut self, dt: f64) -> T {
        if self.complete {
            return self.end;
        }

        self.elapsed += sanitize_delta(dt);
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            self.complete = true;
            return self.end;
        }

        self.value()
    }

    /// Current value without advancing time.
    pub fn value(&self) -> T {
        if self.complete {
            return self.end;
        }
        self.start.lerp_to(self.end, (self.easing)(self.progress()))
    }

    /// Normalized progress, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return if self.complete { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Rewind to the start. Endpoints, duration and easing are kept.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.complete = false;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }
}
