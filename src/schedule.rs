use std::time::{Duration, Instant};

/// Tick interval at speed level 1, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Interval reduction per speed level, in milliseconds.
pub const TICK_STEP_MS: u64 = 5;

/// Score needed per speed level increase (five food items).
pub const POINTS_PER_SPEED_LEVEL: u32 = 50;

/// Returns the 1-based speed level reached at `score`.
#[must_use]
pub fn speed_level(score: u32) -> u32 {
    1 + score / POINTS_PER_SPEED_LEVEL
}

/// Returns the delay between ticks for the speed level reached at `score`.
#[must_use]
pub fn tick_interval(score: u32) -> Duration {
    let speed_penalty_ms = u64::from(speed_level(score) - 1) * TICK_STEP_MS;
    let clamped_ms = DEFAULT_TICK_INTERVAL_MS
        .saturating_sub(speed_penalty_ms)
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(clamped_ms)
}

/// Whole-second countdown shown before play starts or resumes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Countdown {
    started_at: Instant,
    seconds: u8,
}

impl Countdown {
    #[must_use]
    pub fn start(seconds: u8, now: Instant) -> Self {
        Self {
            started_at: now,
            seconds,
        }
    }

    /// Seconds left to display, rounded up; zero once finished.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u8 {
        let total = Duration::from_secs(u64::from(self.seconds));
        let elapsed = now.saturating_duration_since(self.started_at);
        let left = total.saturating_sub(elapsed);

        let whole = left.as_secs() + u64::from(left.subsec_nanos() > 0);
        u8::try_from(whole).unwrap_or(self.seconds)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.remaining_secs(now) == 0
    }
}
