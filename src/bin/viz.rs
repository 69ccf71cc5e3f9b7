use std::time::Instant;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use rocket_ascent::scene::assembly::RocketAssembly;
use rocket_ascent::scene::presenter::{Hud, LogView, ScenePresenter};
use rocket_ascent::sim::driver::FrameDriver;
use rocket_ascent::types::LaunchConfig;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 750.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rocket Ascent",
        options,
        Box::new(|_| Ok(Box::new(AscentViz::new()))),
    )
}

// ---------------------------------------------------------------------------
// Presentation sinks backed by egui widgets
// ---------------------------------------------------------------------------

/// Scene state the driver pushes; the painter reads it each frame.
struct SceneView {
    rocket_y: f64,
    yaw: f64,
    camera_y: f64,
    target_y: f64,
}

impl SceneView {
    fn new() -> Self {
        // Initial camera framing: slightly above the pad.
        Self { rocket_y: 0.0, yaw: 0.0, camera_y: 0.5, target_y: 0.0 }
    }
}

impl ScenePresenter for SceneView {
    fn set_rocket_vertical_position(&mut self, y: f64) {
        self.rocket_y = y;
    }
    fn set_rocket_yaw(&mut self, radians: f64) {
        self.yaw = radians;
    }
    fn set_camera_vertical_offset(&mut self, delta: f64) {
        self.camera_y += delta;
    }
    fn update_controls_target(&mut self, y: f64) {
        self.target_y = y;
    }
    fn render(&mut self) {
        // egui repaints the whole frame; nothing to flush here.
    }
}

#[derive(Default)]
struct HudText {
    altitude: String,
    velocity: String,
    acceleration: String,
    drag: String,
    frame_rate: String,
}

impl Hud for HudText {
    fn set_altitude(&mut self, text: &str) {
        self.altitude = text.to_string();
    }
    fn set_velocity(&mut self, text: &str) {
        self.velocity = text.to_string();
    }
    fn set_acceleration(&mut self, text: &str) {
        self.acceleration = text.to_string();
    }
    fn set_drag(&mut self, text: &str) {
        self.drag = text.to_string();
    }
    fn set_frame_rate(&mut self, text: &str) {
        self.frame_rate = text.to_string();
    }
}

#[derive(Default)]
struct LogPanel {
    lines: Vec<String>,
    stick_to_bottom: bool,
}

impl LogView for LogPanel {
    fn append_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
    fn scroll_to_bottom(&mut self) {
        self.stick_to_bottom = true;
    }
}

// ---------------------------------------------------------------------------
// The application
// ---------------------------------------------------------------------------

/// Keep the altitude trace bounded: once full, drop every other point.
const TRACE_CAP: usize = 4000;

struct AscentViz {
    driver: FrameDriver,
    scene: SceneView,
    hud: HudText,
    log: LogPanel,
    assembly: RocketAssembly,
    epoch: Instant,
    altitude_trace: Vec<[f64; 2]>,
}

impl AscentViz {
    fn new() -> Self {
        Self {
            driver: FrameDriver::launch(&LaunchConfig::default(), 0.0),
            scene: SceneView::new(),
            hud: HudText::default(),
            log: LogPanel::default(),
            assembly: RocketAssembly::standard(),
            epoch: Instant::now(),
            altitude_trace: Vec::new(),
        }
    }

    fn paint_scene(&self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(8, 10, 24));

        // Vertical view span in meters, centered on the camera.
        let span = 8.0;
        let px_per_m = f64::from(rect.height()) / span;
        let bottom_world = self.scene.camera_y - span / 2.0;
        let to_screen = |x_m: f64, y_m: f64| {
            egui::pos2(
                rect.center().x + (x_m * px_per_m) as f32,
                rect.bottom() - ((y_m - bottom_world) * px_per_m) as f32,
            )
        };

        // Ground, when still in view.
        let ground_screen_y = to_screen(0.0, 0.0).y;
        if ground_screen_y < rect.bottom() + 4.0 && ground_screen_y > rect.top() {
            let ground = egui::Rect::from_min_max(
                egui::pos2(rect.left(), ground_screen_y),
                rect.max,
            );
            painter.rect_filled(ground, 0.0, egui::Color32::from_rgb(0, 51, 0));
        }

        // Fins first so the body overdraws their roots. Yaw rotates the
        // assembly about the vertical axis; the side view keeps x only.
        let (sin_yaw, cos_yaw) = self.scene.yaw.sin_cos();
        for fin in &self.assembly.fins {
            let points: Vec<egui::Pos2> = fin
                .positions
                .iter()
                .map(|p| {
                    let x = p.x * cos_yaw - p.z * sin_yaw;
                    to_screen(x, self.scene.rocket_y + p.y)
                })
                .collect();
            painter.add(egui::Shape::convex_polygon(
                points,
                egui::Color32::from_rgb(187, 187, 255),
                egui::Stroke::NONE,
            ));
        }

        // Body and nose silhouette: right half mirrored into a closed hull.
        let outline = self.assembly.silhouette();
        let mut points: Vec<egui::Pos2> = outline
            .iter()
            .map(|p| to_screen(p.x, self.scene.rocket_y + p.y))
            .collect();
        points.extend(
            outline
                .iter()
                .rev()
                .map(|p| to_screen(-p.x, self.scene.rocket_y + p.y)),
        );
        painter.add(egui::Shape::convex_polygon(
            points,
            egui::Color32::from_rgb(220, 224, 240),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(17, 34, 136)),
        ));

        // Orbit-controls target marker.
        let target = to_screen(0.0, self.scene.target_y);
        painter.circle_stroke(target, 3.0, egui::Stroke::new(1.0, egui::Color32::from_gray(110)));
    }
}

impl eframe::App for AscentViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.driver
            .tick(now_ms, &mut self.scene, &mut self.hud, &mut self.log);
        self.altitude_trace
            .push([now_ms / 1000.0, self.driver.context().state.position]);
        if self.altitude_trace.len() > TRACE_CAP {
            let mut keep = false;
            self.altitude_trace.retain(|_| {
                keep = !keep;
                keep
            });
        }

        egui::TopBottomPanel::top("hud").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(format!("Altitude: {:>12}", self.hud.altitude));
                ui.separator();
                ui.monospace(format!("Velocity: {:>14}", self.hud.velocity));
                ui.separator();
                ui.monospace(format!("Accel: {:>13}", self.hud.acceleration));
                ui.separator();
                ui.monospace(format!("Drag: {:>13}", self.hud.drag));
                ui.separator();
                ui.monospace(format!("FPS: {:>6}", self.hud.frame_rate));
            });
        });

        egui::SidePanel::right("log")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Flight log");
                egui::ScrollArea::vertical()
                    .stick_to_bottom(self.log.stick_to_bottom)
                    .show(ui, |ui| {
                        for line in &self.log.lines {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let half_w = ui.available_width() / 2.0 - 8.0;
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(half_w);
                    self.paint_scene(ui);
                });
                ui.vertical(|ui| {
                    ui.label("Altitude (m)");
                    let points: PlotPoints = self.altitude_trace.iter().copied().collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                        });
                });
            });
        });

        // Continuous repaint: the egui analog of re-arming an
        // animation-frame callback every frame.
        ctx.request_repaint();
    }
}
