//! Survival time representation and formatting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elapsed time split into display units
///
/// Serialized with the legacy `miliseconds` field name so records written by
/// older builds of the page still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurvivalTime {
    pub minutes: u32,
    pub seconds: u32,
    #[serde(rename = "miliseconds")]
    pub milliseconds: u32,
}

impl SurvivalTime {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Split a linear millisecond count
    pub fn from_millis(total: u64) -> Self {
        Self {
            minutes: (total / 60_000).min(u32::MAX as u64) as u32,
            seconds: ((total / 1000) % 60) as u32,
            milliseconds: (total % 1000) as u32,
        }
    }

    /// Elapsed time between two wall-clock readings (ms). Negative spans read as zero.
    pub fn between(start_ms: f64, now_ms: f64) -> Self {
        let span = (now_ms - start_ms).max(0.0).floor();
        Self::from_millis(span as u64)
    }

    /// Linear millisecond value used for comparisons
    pub fn as_millis(&self) -> u64 {
        self.minutes as u64 * 60_000 + self.seconds as u64 * 1000 + self.milliseconds as u64
    }
}

impl fmt::Display for SurvivalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(self.minutes, self.seconds, self.milliseconds))
    }
}

/// Format as `MM:SS:mmm`, zero padded
pub fn format_time(minutes: u32, seconds: u32, milliseconds: u32) -> String {
    format!("{:02}:{:02}:{:03}", minutes, seconds, milliseconds)
}
