pub mod driver;
pub mod events;
pub mod frame_clock;

pub use driver::{FixedStepScheduler, FrameDriver, FrameScheduler, SimulationContext};
pub use events::{Action, ActionQueue, EventLog, EventLogEntry, FlightEvent};
pub use frame_clock::{RollingFrameClock, WINDOW_LEN};
