pub mod clock;
pub mod integrator;
pub mod state;

pub use clock::{Phase, SimulationClock};
pub use integrator::{euler_step, StepOutcome};
pub use state::{FlightState, LaunchConfig, G};
