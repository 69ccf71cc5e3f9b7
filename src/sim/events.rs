// ---------------------------------------------------------------------------
// Flight milestones, the append-only event log, and scheduled one-shots
// ---------------------------------------------------------------------------

/// Kinds of flight milestones worth logging.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightEvent {
    SimulationStarted,
    ThrustStarted,
    ThrustStopped,
    Apogee { altitude: f64 },
}

impl FlightEvent {
    pub fn message(&self) -> String {
        match self {
            FlightEvent::SimulationStarted => "Simulation started".to_string(),
            FlightEvent::ThrustStarted => "Thrust started".to_string(),
            FlightEvent::ThrustStopped => "Thrust stopped".to_string(),
            FlightEvent::Apogee { altitude } => {
                format!("Max Altitude Reached ({altitude:.2}m)")
            }
        }
    }
}

/// Immutable once created; ordering is emission order.
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub at_ms: f64,
    pub message: String,
}

impl EventLogEntry {
    /// HUD line format: seconds since the scheduler epoch, two decimals.
    pub fn display_line(&self) -> String {
        format!("{:.2}: {}", self.at_ms / 1000.0, self.message)
    }
}

/// Append-only timestamped log of flight milestones.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<EventLogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &FlightEvent, at_ms: f64) {
        self.entries.push(EventLogEntry {
            at_ms,
            message: event.message(),
        });
    }

    pub fn entries(&self) -> &[EventLogEntry] {
        &self.entries
    }
}

// ---------------------------------------------------------------------------
// Scheduled actions: "fire once after N ms", drained at tick boundaries
// ---------------------------------------------------------------------------

/// The two thrust-schedule mutations. The integrator only ever reads
/// thrust, so it does not matter whether an action lands between two ticks
/// or exactly on a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartThrust,
    StopThrust,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledAction {
    due_ms: f64,
    action: Action,
}

/// One-shot action queue consumed by the frame driver. Replaces host timer
/// callbacks with discrete events applied between physics steps.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<ScheduledAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, action: Action) {
        self.pending.push(ScheduledAction { due_ms, action });
    }

    /// Remove and return every action due at `now_ms`, in due order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<Action> {
        let mut due: Vec<ScheduledAction> = Vec::new();
        self.pending.retain(|scheduled| {
            if scheduled.due_ms <= now_ms {
                due.push(*scheduled);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter().map(|scheduled| scheduled.action).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apogee_message_has_two_decimals() {
        let event = FlightEvent::Apogee { altitude: 123.456 };
        assert_eq!(event.message(), "Max Altitude Reached (123.46m)");
    }

    #[test]
    fn display_line_formats_seconds() {
        let mut log = EventLog::new();
        log.record(&FlightEvent::ThrustStarted, 3016.7);
        assert_eq!(log.entries()[0].display_line(), "3.02: Thrust started");
    }

    #[test]
    fn log_preserves_emission_order() {
        let mut log = EventLog::new();
        log.record(&FlightEvent::SimulationStarted, 0.0);
        log.record(&FlightEvent::ThrustStarted, 3000.0);
        log.record(&FlightEvent::ThrustStopped, 6000.0);
        let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Simulation started", "Thrust started", "Thrust stopped"]
        );
    }

    #[test]
    fn actions_fire_once_in_due_order() {
        let mut queue = ActionQueue::new();
        queue.schedule(6000.0, Action::StopThrust);
        queue.schedule(3000.0, Action::StartThrust);

        assert!(queue.drain_due(2999.9).is_empty());
        assert_eq!(queue.drain_due(3000.0), vec![Action::StartThrust]);
        // Already drained: nothing fires twice.
        assert!(queue.drain_due(3000.0).is_empty());

        // A late tick picks up the burnout action.
        assert_eq!(queue.drain_due(10_000.0), vec![Action::StopThrust]);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn coincident_tick_drains_both_in_order() {
        let mut queue = ActionQueue::new();
        queue.schedule(6000.0, Action::StopThrust);
        queue.schedule(3000.0, Action::StartThrust);
        assert_eq!(
            queue.drain_due(6000.0),
            vec![Action::StartThrust, Action::StopThrust]
        );
    }
}
