use crate::flight::state::{FlightState, G};

// ---------------------------------------------------------------------------
// Explicit Euler integrator with ground floor and apogee detection
// ---------------------------------------------------------------------------

/// What a single step observed, for the caller to act on.
///
/// `delta_altitude` is the altitude change produced by this step (the camera
/// follow offset). `apogee` carries the altitude at which the falling-edge
/// detector fired, at most once per run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    pub delta_altitude: f64,
    pub apogee: Option<f64>,
}

/// Sign with `sign(0) = 0`, so drag vanishes exactly at rest.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Advance the flight state by one explicit-Euler step.
///
/// Order matters and is part of the contract:
///   1. ground contact — once landed after apogee, velocity is zeroed and a
///      reaction of -G cancels gravity for the rest of the run;
///   2. apogee — fires on the first frame where altitude decreases (one
///      frame past the true peak);
///   3. altitude snapshot for the next frame's detector;
///   4. quadratic drag opposing current velocity;
///   5. position from OLD velocity, velocity from OLD acceleration,
///      acceleration recomputed last for the next step. Position is floored
///      at 0 and never bounces.
///
/// `dt` is not validated; 0 is a no-op for the kinematics and negative
/// values propagate through the same formulas.
pub fn euler_step(state: &mut FlightState, dt: f64) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if state.position == 0.0 && state.reached_apogee {
        state.velocity = 0.0;
        state.normal_reaction = -G;
    } else {
        state.normal_reaction = 0.0;
    }

    if state.position < state.last_altitude && !state.reached_apogee {
        state.reached_apogee = true;
        outcome.apogee = Some(state.position);
    }
    state.last_altitude = state.position;

    state.drag = -sign(state.velocity) * state.drag_coefficient * state.velocity * state.velocity;

    let previous = state.position;
    state.position = (state.position + dt * state.velocity).max(0.0);
    state.velocity += dt * state.acceleration;
    state.acceleration = state.thrust + G + state.normal_reaction + state.drag;

    outcome.delta_altitude = state.position - previous;
    outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
