use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// Rolling frame-rate estimate over a fixed FIFO window of frame deltas
// ---------------------------------------------------------------------------

/// Number of frame deltas retained.
pub const WINDOW_LEN: usize = 30;

/// Fixed-size FIFO of the most recent frame durations (seconds), pre-filled
/// with zeros. While the window is still warming up the rate formula
/// divides by a partial sum and overestimates; with an all-zero window it
/// divides by zero outright. That raw value is intentional — display code
/// caps it, the clock does not.
#[derive(Debug, Clone)]
pub struct RollingFrameClock {
    samples: VecDeque<f64>,
}

impl RollingFrameClock {
    pub fn new() -> Self {
        Self {
            samples: std::iter::repeat(0.0).take(WINDOW_LEN).collect(),
        }
    }

    /// Append a frame delta, evicting the oldest sample. Length is constant.
    pub fn push(&mut self, dt: f64) {
        self.samples.push_back(dt);
        self.samples.pop_front();
    }

    /// Instantaneous rate estimate: `N / sum(window)`, Hz.
    pub fn current_rate_hz(&self) -> f64 {
        let sum: f64 = self.samples.iter().sum();
        WINDOW_LEN as f64 / sum
    }
}

impl Default for RollingFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn steady_frames_give_exact_rate() {
        let mut clock = RollingFrameClock::new();
        for _ in 0..WINDOW_LEN {
            clock.push(1.0 / 60.0);
        }
        assert_relative_eq!(clock.current_rate_hz(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn startup_rate_is_unbounded_not_a_panic() {
        let clock = RollingFrameClock::new();
        let raw = clock.current_rate_hz();
        assert!(!raw.is_finite());
    }

    #[test]
    fn window_is_fifo_with_constant_length() {
        let mut clock = RollingFrameClock::new();
        // One large outlier, then enough steady frames to evict it.
        clock.push(10.0);
        for _ in 0..WINDOW_LEN - 1 {
            clock.push(0.01);
        }
        let with_outlier = clock.current_rate_hz();
        clock.push(0.01);
        let evicted = clock.current_rate_hz();
        assert!(evicted > with_outlier, "oldest sample should have been dropped");
        assert_relative_eq!(evicted, 100.0, max_relative = 1e-9);
        assert_eq!(clock.samples.len(), WINDOW_LEN);
    }

    #[test]
    fn partial_window_overestimates() {
        // Half-filled window: zeros still in the sum inflate the rate.
        let mut clock = RollingFrameClock::new();
        for _ in 0..WINDOW_LEN / 2 {
            clock.push(1.0 / 60.0);
        }
        assert_relative_eq!(clock.current_rate_hz(), 120.0, max_relative = 1e-9);
    }
}
