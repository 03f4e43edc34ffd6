//! Throughput statistics.

use std::time::Duration;

use factoryvis_core::constants::{HOURS_PER_DAY, SECS_PER_HOUR};

/// Completion rates derived from a count and a wall-clock span.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Throughput {
    pub per_hour: f64,
    /// `per_hour` projected over a full day.
    pub per_day: f64,
}

/// Rates for `completed` units over `elapsed`. Zero when no time has passed.
pub fn throughput(completed: u32, elapsed: Duration) -> Throughput {
    let hours = elapsed.as_secs_f64() / SECS_PER_HOUR;
    if hours <= 0.0 {
        return Throughput::default();
    }
    let per_hour = f64::from(completed) / hours;
    Throughput {
        per_hour,
        per_day: per_hour * HOURS_PER_DAY,
    }
}

/// Human-readable elapsed time: `"42s"`, `"3m 07s"`, `"1h 02m 05s"`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
