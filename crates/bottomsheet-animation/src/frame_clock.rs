//! Monotonic frame timestamps.

use web_time::{Duration, Instant};

/// Converts wall-clock instants into the nanosecond frame times consumed by
/// [`crate::Animatable::tick`].
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self { origin }
    }

    /// Nanoseconds elapsed since the clock was created.
    pub fn now_nanos(&self) -> u64 {
        self.nanos_at(Instant::now())
    }

    /// Frame time for `instant`; instants before the origin map to 0.
    pub fn nanos_at(&self, instant: Instant) -> u64 {
        let elapsed = instant
            .checked_duration_since(self.origin)
            .unwrap_or(Duration::ZERO);
        u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
