// ---------------------------------------------------------------------------
// Thrust schedule gate: countdown → thrust → coast, purely time-driven
// ---------------------------------------------------------------------------

/// Epoch of the simulation schedule. Transitions are one-directional; no
/// event can move the clock backwards through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before ignition: physics is frozen, only the scene keeps rendering.
    Countdown,
    /// Motor burning at the configured thrust.
    Thrusting,
    /// Burnout onward. Terminal: thrust stays zero forever after.
    Coasting,
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    start_ms: f64,
    delay_ms: f64,
    burn_ms: f64,
}

impl SimulationClock {
    pub fn new(start_ms: f64, delay_ms: f64, burn_ms: f64) -> Self {
        Self { start_ms, delay_ms, burn_ms }
    }

    /// Milliseconds since the scheduler epoch at which this run began.
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.start_ms
    }

    /// Ignition instant: end of countdown.
    pub fn thrust_start_ms(&self) -> f64 {
        self.start_ms + self.delay_ms
    }

    /// Burnout instant.
    pub fn thrust_stop_ms(&self) -> f64 {
        self.start_ms + self.delay_ms + self.burn_ms
    }

    pub fn phase_at(&self, now_ms: f64) -> Phase {
        let elapsed = self.elapsed_ms(now_ms);
        if elapsed < self.delay_ms {
            Phase::Countdown
        } else if elapsed < self.delay_ms + self.burn_ms {
            Phase::Thrusting
        } else {
            Phase::Coasting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries() {
        let clock = SimulationClock::new(1000.0, 3000.0, 3000.0);
        assert_eq!(clock.phase_at(1000.0), Phase::Countdown);
        assert_eq!(clock.phase_at(3999.9), Phase::Countdown);
        // Boundaries belong to the later phase.
        assert_eq!(clock.phase_at(4000.0), Phase::Thrusting);
        assert_eq!(clock.phase_at(6999.9), Phase::Thrusting);
        assert_eq!(clock.phase_at(7000.0), Phase::Coasting);
        assert_eq!(clock.phase_at(1e9), Phase::Coasting);
    }

    #[test]
    fn ignition_and_burnout_instants() {
        let clock = SimulationClock::new(500.0, 3000.0, 3000.0);
        assert_eq!(clock.thrust_start_ms(), 3500.0);
        assert_eq!(clock.thrust_stop_ms(), 6500.0);
        assert_eq!(clock.elapsed_ms(4000.0), 3500.0);
    }
}
