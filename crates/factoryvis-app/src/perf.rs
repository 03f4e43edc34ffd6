//! Loop timing statistics: rolling frame time and a once-per-second FPS.

use std::collections::VecDeque;
use std::time::Duration;

/// Frame samples kept for the rolling average.
pub const FRAME_SAMPLES: usize = 60;

const FPS_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_ms: VecDeque<f64>,
    frames_in_window: u32,
    window_start: Duration,
    fps: u32,
}

impl FrameStats {
    /// Start measuring at `now` (any monotonic origin).
    pub fn new(now: Duration) -> Self {
        Self {
            frame_ms: VecDeque::with_capacity(FRAME_SAMPLES),
            frames_in_window: 0,
            window_start: now,
            fps: 0,
        }
    }

    /// Record one frame that took `frame` and finished at `now`.
    ///
    /// Returns the new FPS figure when a one-second window closes.
    pub fn record(&mut self, frame: Duration, now: Duration) -> Option<u32> {
        if self.frame_ms.len() == FRAME_SAMPLES {
            self.frame_ms.pop_front();
        }
        self.frame_ms.push_back(frame.as_secs_f64() * 1000.0);
        self.frames_in_window += 1;

        let window = now.saturating_sub(self.window_start);
        if window < FPS_WINDOW {
            return None;
        }

        self.fps = (f64::from(self.frames_in_window) / window.as_secs_f64()).round() as u32;
        self.frames_in_window = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// Mean frame time over the retained samples, in milliseconds.
    pub fn average_frame_ms(&self) -> f64 {
        if self.frame_ms.is_empty() {
            return 0.0;
        }
        self.frame_ms.iter().sum::<f64>() / self.frame_ms.len() as f64
    }

    /// Last completed FPS figure.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn sample_count(&self) -> usize {
        self.frame_ms.len()
    }
}
