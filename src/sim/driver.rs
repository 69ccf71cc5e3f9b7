use crate::flight::clock::{Phase, SimulationClock};
use crate::flight::integrator::euler_step;
use crate::flight::state::{FlightState, LaunchConfig};
use crate::scene::presenter::{display_rate, fmt_exp, Hud, LogView, ScenePresenter};
use crate::sim::events::{Action, ActionQueue, EventLog, FlightEvent};
use crate::sim::frame_clock::RollingFrameClock;

// ---------------------------------------------------------------------------
// Simulation context: every mutable piece of a run, owned in one place
// ---------------------------------------------------------------------------

/// The whole mutable state of one simulation run. Created at launch,
/// mutated once per frame by the driver, dropped at teardown. Nothing here
/// is shared or global.
#[derive(Debug)]
pub struct SimulationContext {
    pub state: FlightState,
    pub frame_clock: RollingFrameClock,
    pub log: EventLog,
    pub clock: SimulationClock,
    actions: ActionQueue,
    last_timestamp_ms: f64,
    running: bool,
}

impl SimulationContext {
    /// Build the run: pad state, empty frame window, the two thrust
    /// one-shots queued, and the opening log entry recorded.
    pub fn launch(config: &LaunchConfig, start_ms: f64) -> Self {
        let clock = SimulationClock::new(start_ms, config.delay_ms, config.burn_ms);

        let mut actions = ActionQueue::new();
        actions.schedule(clock.thrust_start_ms(), Action::StartThrust);
        actions.schedule(clock.thrust_stop_ms(), Action::StopThrust);

        let mut log = EventLog::new();
        log.record(&FlightEvent::SimulationStarted, start_ms);

        Self {
            state: FlightState::on_pad(config),
            frame_clock: RollingFrameClock::new(),
            log,
            clock,
            actions,
            last_timestamp_ms: start_ms,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ---------------------------------------------------------------------------
// Frame scheduling
// ---------------------------------------------------------------------------

/// Host vsync/timer primitive: yields the timestamp (ms since the scheduler
/// epoch) of each successive frame, `None` once the host shuts down.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Deterministic scheduler for headless runs and tests: fixed-interval
/// synthetic timestamps up to a duration.
#[derive(Debug)]
pub struct FixedStepScheduler {
    now_ms: f64,
    step_ms: f64,
    end_ms: f64,
}

impl FixedStepScheduler {
    pub fn new(step_ms: f64, duration_ms: f64) -> Self {
        Self { now_ms: 0.0, step_ms, end_ms: duration_ms }
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        let next = self.now_ms + self.step_ms;
        if next > self.end_ms {
            return None;
        }
        self.now_ms = next;
        Some(next)
    }
}

// ---------------------------------------------------------------------------
// Frame driver
// ---------------------------------------------------------------------------

/// Per-frame orchestrator. Each tick: compute dt, gate on the schedule
/// phase, drain due one-shots, integrate, and push results to the scene,
/// HUD, and log view. Single-threaded and cooperative; a missed frame just
/// shows up as a larger dt on the next tick.
pub struct FrameDriver {
    ctx: SimulationContext,
    notified: usize,
}

impl FrameDriver {
    pub fn launch(config: &LaunchConfig, start_ms: f64) -> Self {
        Self {
            ctx: SimulationContext::launch(config, start_ms),
            notified: 0,
        }
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimulationContext {
        &mut self.ctx
    }

    pub fn is_running(&self) -> bool {
        self.ctx.running
    }

    /// Request cancellation; `run` exits before its next tick.
    pub fn stop(&mut self) {
        self.ctx.running = false;
    }

    /// One frame. `now_ms` is the host timestamp in milliseconds since the
    /// scheduler epoch.
    pub fn tick<P, H, L>(&mut self, now_ms: f64, presenter: &mut P, hud: &mut H, log_view: &mut L)
    where
        P: ScenePresenter,
        H: Hud,
        L: LogView,
    {
        let dt = (now_ms - self.ctx.last_timestamp_ms) / 1000.0;
        self.ctx.last_timestamp_ms = now_ms;

        if self.ctx.clock.phase_at(now_ms) == Phase::Countdown {
            // Physics frozen: keep the orbit camera alive and render.
            presenter.update_controls_target(self.ctx.state.position);
            presenter.render();
            self.flush_log(log_view);
            return;
        }

        for action in self.ctx.actions.drain_due(now_ms) {
            match action {
                Action::StartThrust => {
                    self.ctx.log.record(&FlightEvent::ThrustStarted, now_ms);
                }
                Action::StopThrust => {
                    self.ctx.state.thrust = 0.0;
                    self.ctx.log.record(&FlightEvent::ThrustStopped, now_ms);
                }
            }
        }

        self.ctx.frame_clock.push(dt);
        let frame_rate = self.ctx.frame_clock.current_rate_hz();

        let outcome = euler_step(&mut self.ctx.state, dt);
        if let Some(altitude) = outcome.apogee {
            self.ctx.log.record(&FlightEvent::Apogee { altitude }, now_ms);
        }

        let state = &self.ctx.state;
        presenter.set_rocket_vertical_position(state.position);
        presenter.set_rocket_yaw(self.ctx.clock.elapsed_ms(now_ms) / 1000.0);

        hud.set_altitude(&format!("{} m", fmt_exp(state.position)));
        hud.set_velocity(&format!("{} m/s", fmt_exp(state.velocity)));
        hud.set_acceleration(&format!("{} m/s^2", fmt_exp(state.acceleration)));
        hud.set_drag(&format!("{} m/s^2", fmt_exp(state.drag)));
        hud.set_frame_rate(&format!("{:.1}", display_rate(frame_rate)));

        presenter.set_camera_vertical_offset(outcome.delta_altitude);
        presenter.update_controls_target(state.position);
        presenter.render();

        self.flush_log(log_view);
    }

    /// Run until the scheduler stops yielding frames or `stop` is called.
    pub fn run<S, P, H, L>(
        &mut self,
        scheduler: &mut S,
        presenter: &mut P,
        hud: &mut H,
        log_view: &mut L,
    ) where
        S: FrameScheduler,
        P: ScenePresenter,
        H: Hud,
        L: LogView,
    {
        while self.ctx.running {
            match scheduler.next_frame() {
                Some(now_ms) => self.tick(now_ms, presenter, hud, log_view),
                None => break,
            }
        }
    }

    /// Forward log entries recorded since the last tick to the view.
    fn flush_log<L: LogView>(&mut self, log_view: &mut L) {
        let entries = self.ctx.log.entries();
        if self.notified == entries.len() {
            return;
        }
        for entry in &entries[self.notified..] {
            log_view.append_line(&entry.display_line());
        }
        self.notified = entries.len();
        log_view.scroll_to_bottom();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
