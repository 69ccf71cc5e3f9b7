use rocket_ascent::scene::presenter::{NullHud, NullLogView, NullPresenter};
use rocket_ascent::sim::driver::{FrameDriver, FrameScheduler, FixedStepScheduler};
use rocket_ascent::types::LaunchConfig;

fn main() {
    // -----------------------------------------------------------------------
    // Launch configuration: 3 s countdown, 3 s burn
    // -----------------------------------------------------------------------
    let config = LaunchConfig::default();
    let frame_ms = 1000.0 / 60.0;

    let mut driver = FrameDriver::launch(&config, 0.0);
    let mut scheduler = FixedStepScheduler::new(frame_ms, 60_000.0);

    // -----------------------------------------------------------------------
    // Drive the frame loop headless, sampling once per simulated second
    // -----------------------------------------------------------------------
    let mut samples: Vec<(f64, f64, f64)> = Vec::new(); // (t s, alt m, vel m/s)
    let mut max_speed = 0.0_f64;
    let mut apogee = 0.0_f64;
    let mut touchdown_ms = None;
    let mut next_sample_ms = 0.0;

    while let Some(now_ms) = scheduler.next_frame() {
        driver.tick(now_ms, &mut NullPresenter, &mut NullHud, &mut NullLogView);
        let state = &driver.context().state;

        max_speed = max_speed.max(state.velocity.abs());
        apogee = apogee.max(state.position);
        if now_ms >= next_sample_ms {
            samples.push((now_ms / 1000.0, state.position, state.velocity));
            next_sample_ms += 1000.0;
        }

        if state.landed() && touchdown_ms.is_none() {
            touchdown_ms = Some(now_ms);
        }
        // One extra second on the ground, then stop the loop.
        if touchdown_ms.is_some_and(|t| now_ms >= t + 1000.0) {
            driver.stop();
            break;
        }
    }

    // -----------------------------------------------------------------------
    // Flight report
    // -----------------------------------------------------------------------
    println!();
    println!("==========================================================");
    println!("  ROCKET ASCENT — headless run @ {:.1} Hz", 1000.0 / frame_ms);
    println!("==========================================================");
    println!();

    println!("  Event Log");
    println!("  --------------------------------------------------------");
    for entry in driver.context().log.entries() {
        println!("  {}", entry.display_line());
    }
    println!();

    println!("  Summary");
    println!("  --------------------------------------------------------");
    println!("  Apogee:        {apogee:>8.2} m");
    println!("  Max speed:     {max_speed:>8.2} m/s");
    if let Some(t) = touchdown_ms {
        println!("  Touchdown:     {:>8.2} s", t / 1000.0);
    }
    println!(
        "  Frame window:  {:>8.1} Hz (rolling estimate)",
        driver.context().frame_clock.current_rate_hz()
    );
    println!();

    println!("  Trajectory");
    println!("  --------------------------------------------------------");
    println!("  {:>7}  {:>9}  {:>10}", "t (s)", "alt (m)", "vel (m/s)");
    for (t, alt, vel) in &samples {
        println!("  {t:>7.2}  {alt:>9.2}  {vel:>10.2}");
    }
    println!();
}
