//! Round countdown, the terminal stand-in for an engine "delayed call".

/// Counts down from a fixed duration and fires once when it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration_ms: u64,
    elapsed_ms: u64,
    fired: bool,
}

impl Countdown {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
            fired: false,
        }
    }

    /// Consume `dt_ms` of time. Returns true only on the call where the
    /// countdown first hits zero.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        if self.fired {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.duration_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms - self.elapsed_ms
    }

    pub fn remaining_seconds(&self) -> f64 {
        self.remaining_ms() as f64 / 1000.0
    }

    /// Remaining seconds rounded to the nearest integer, halves rounding up.
    pub fn display_seconds(&self) -> u64 {
        self.remaining_ms().saturating_add(500) / 1000
    }

    /// Fraction of the round already elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.elapsed_ms as f64 / self.duration_ms as f64
    }

    pub fn is_expired(&self) -> bool {
        self.fired
    }
}
