// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Gravitational acceleration, m/s^2. Up is positive, so gravity is negative.
pub const G: f64 = -9.81;

// ---------------------------------------------------------------------------
// Launch configuration
// ---------------------------------------------------------------------------

/// Fixed parameters of a simulation run: the vehicle's two physical
/// constants plus the countdown and burn durations of the thrust schedule.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub thrust: f64,           // m/s^2, mass-normalized motor acceleration
    pub drag_coefficient: f64, // 1/m, quadratic drag scale
    pub delay_ms: f64,         // countdown before ignition
    pub burn_ms: f64,          // thrust duration after ignition
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            thrust: 50.0,
            drag_coefficient: 0.01,
            delay_ms: 3000.0,
            burn_ms: 3000.0,
        }
    }
}

// ---------------------------------------------------------------------------
// 1D vertical flight state
// ---------------------------------------------------------------------------

/// Scalar kinematic state of the rocket on its vertical axis.
///
/// All accelerations are mass-normalized (m/s^2). `last_altitude` is the
/// previous frame's altitude snapshot used by the falling-edge apogee
/// detector; `reached_apogee` is monotonic — once set it never resets
/// within a run.
#[derive(Debug, Clone)]
pub struct FlightState {
    pub position: f64,         // m, altitude above the pad, never negative
    pub velocity: f64,         // m/s
    pub acceleration: f64,     // m/s^2
    pub drag: f64,             // m/s^2
    pub normal_reaction: f64,  // m/s^2, ground reaction after landing
    pub thrust: f64,           // m/s^2, zeroed at burnout
    pub drag_coefficient: f64,
    pub reached_apogee: bool,
    pub last_altitude: f64,
}

impl FlightState {
    /// State at rest on the pad with the configured motor constants.
    pub fn on_pad(config: &LaunchConfig) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            drag: 0.0,
            normal_reaction: 0.0,
            thrust: config.thrust,
            drag_coefficient: config.drag_coefficient,
            reached_apogee: false,
            last_altitude: 0.0,
        }
    }

    /// True once the rocket is back on the ground after its flight.
    pub fn landed(&self) -> bool {
        self.position == 0.0 && self.reached_apogee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_state_carries_config_constants() {
        let config = LaunchConfig::default();
        let state = FlightState::on_pad(&config);
        assert_eq!(state.thrust, 50.0);
        assert_eq!(state.drag_coefficient, 0.01);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.velocity, 0.0);
        assert!(!state.reached_apogee);
    }

    #[test]
    fn pad_state_is_not_landed() {
        // On the pad before flight: grounded but apogee not yet reached.
        let state = FlightState::on_pad(&LaunchConfig::default());
        assert!(!state.landed());
    }
}
