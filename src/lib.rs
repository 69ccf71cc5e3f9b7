pub mod flight;
pub mod scene;
pub mod sim;

// Flat re-exports for the common types
pub mod types {
    pub use crate::flight::clock::{Phase, SimulationClock};
    pub use crate::flight::state::{FlightState, LaunchConfig, G};
    pub use crate::sim::driver::{FixedStepScheduler, FrameDriver, FrameScheduler, SimulationContext};
    pub use crate::sim::events::{EventLog, EventLogEntry, FlightEvent};
    pub use crate::sim::frame_clock::RollingFrameClock;
}
