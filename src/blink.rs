use embassy_time::{Duration, Instant};

/// Fixed-frequency on/off toggle for the emergency pattern
///
/// Advances on every tick regardless of the zone, so the phase stays continuous
/// when an emergency comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkState {
    on: bool,
    last_toggle: Instant,
    half_period: Duration,
}

impl BlinkState {
    /// Create a blink with the given full on/off period, starting in the "on" phase
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            on: true,
            last_toggle: now,
            half_period: period / 2,
        }
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }

    pub const fn last_toggle(&self) -> Instant {
        self.last_toggle
    }

    /// Flip the phase if half a period has elapsed since the last toggle
    pub fn advance(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_toggle);
        if elapsed >= self.half_period {
            self.on = !self.on;
            self.last_toggle = now;
        }
    }
}
