// ---------------------------------------------------------------------------
// Presentation boundary: scene, HUD, and log-view sinks the driver feeds
// ---------------------------------------------------------------------------

/// The rendering side of the simulation. Implementations own camera, orbit
/// controls, and the rocket's scene transform; the driver only pushes
/// scalars across this seam.
pub trait ScenePresenter {
    fn set_rocket_vertical_position(&mut self, y: f64);
    /// Cosmetic spin about the vertical axis; pitch and roll stay fixed.
    fn set_rocket_yaw(&mut self, radians: f64);
    /// Move the camera up or down by the altitude gained this frame so the
    /// rocket stays in view.
    fn set_camera_vertical_offset(&mut self, delta: f64);
    /// Keep the orbit controls centered on the rocket.
    fn update_controls_target(&mut self, y: f64);
    fn render(&mut self);
}

/// Five text readouts, updated every active frame.
pub trait Hud {
    fn set_altitude(&mut self, text: &str);
    fn set_velocity(&mut self, text: &str);
    fn set_acceleration(&mut self, text: &str);
    fn set_drag(&mut self, text: &str);
    fn set_frame_rate(&mut self, text: &str);
}

/// Growing text sink for the event log.
pub trait LogView {
    fn append_line(&mut self, line: &str);
    fn scroll_to_bottom(&mut self);
}

// ---------------------------------------------------------------------------
// Readout formatting
// ---------------------------------------------------------------------------

/// Scientific notation with a two-decimal mantissa and an explicit exponent
/// sign: `40.19` → `"4.02e+1"`, `-0.1615` → `"-1.62e-1"`. Negative zero
/// (the drag of a rocket at rest) renders unsigned, as JS `toExponential`
/// does.
pub fn fmt_exp(x: f64) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    let s = format!("{x:.2e}");
    match s.find('e') {
        Some(i) if !s[i + 1..].starts_with('-') => format!("{}e+{}", &s[..i], &s[i + 1..]),
        _ => s,
    }
}

/// Frame rate for display. The raw rolling-window value is unbounded while
/// the window still holds startup zeros; show 0 until it settles.
pub fn display_rate(raw_hz: f64) -> f64 {
    if raw_hz.is_finite() {
        raw_hz
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// No-op sinks for headless runs
// ---------------------------------------------------------------------------

pub struct NullPresenter;

impl ScenePresenter for NullPresenter {
    fn set_rocket_vertical_position(&mut self, _y: f64) {}
    fn set_rocket_yaw(&mut self, _radians: f64) {}
    fn set_camera_vertical_offset(&mut self, _delta: f64) {}
    fn update_controls_target(&mut self, _y: f64) {}
    fn render(&mut self) {}
}

pub struct NullHud;

impl Hud for NullHud {
    fn set_altitude(&mut self, _text: &str) {}
    fn set_velocity(&mut self, _text: &str) {}
    fn set_acceleration(&mut self, _text: &str) {}
    fn set_drag(&mut self, _text: &str) {}
    fn set_frame_rate(&mut self, _text: &str) {}
}

pub struct NullLogView;

impl LogView for NullLogView {
    fn append_line(&mut self, _line: &str) {}
    fn scroll_to_bottom(&mut self) {}
}
