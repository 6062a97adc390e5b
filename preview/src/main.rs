//! Desktop preview app for light-rules scenes
//!
//! Renders a simulated LED strip in a window. Each scene installs a rule on
//! a segment (or multi-segment) of a static strip, exactly the way show code
//! does on hardware.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use light_rules::{
    Duration, HueBasis, Instant, LightStrip, MultiSegment, Rule, Segment,
    color::palette,
};

/// Number of LEDs in the simulated strip
const STRIP_LEN: usize = 150;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// The simulated strip; segments borrow it for 'static
static STRIP: LightStrip<STRIP_LEN> = LightStrip::new();

/// Scene presets exercising the rule primitives and modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scene {
    /// A red window sweeping along the strip
    Comet,
    /// Linear hue ramp drifting over time
    RainbowFlow,
    /// Hue wave between two hues, driven by time
    HueWave,
    /// Rainbow stripe bands marching along the strip
    Stripes,
    /// Blinking alternating bands
    Blink,
    /// Purple fill fading in, then back out
    FadeCycle,
    /// Three segments (middle one reversed) joined into one continuous run
    MultiRun,
}

impl Scene {
    const ALL: [Self; 7] = [
        Self::Comet,
        Self::RainbowFlow,
        Self::HueWave,
        Self::Stripes,
        Self::Blink,
        Self::FadeCycle,
        Self::MultiRun,
    ];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Comet => "comet",
            Self::RainbowFlow => "rainbow_flow",
            Self::HueWave => "hue_wave",
            Self::Stripes => "stripes",
            Self::Blink => "blink",
            Self::FadeCycle => "fade_cycle",
            Self::MultiRun => "multi_run",
        }
    }
}

/// The segments driven this scene; either standalone or joined in a run
enum Stage {
    Single(Segment<'static>),
    Multi(MultiSegment<'static, 4>),
}

impl Stage {
    fn render(&self, now: Instant) {
        match self {
            Self::Single(segment) => segment.render(now),
            Self::Multi(multi) => multi.render(now),
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Light Rules Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "light-rules-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Currently selected scene
    scene: Scene,
    /// Segments with the scene's rules installed
    stage: Stage,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let scene = Scene::Comet;
        Self {
            stage: build_scene(scene, Instant::from_millis(0)),
            scene,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
        }
    }

    /// Rebuild the active scene; time-based layers restart at `now`
    fn switch_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.stage = build_scene(scene, Instant::from_millis(self.t_ms));
    }

    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.stage = build_scene(self.scene, Instant::from_millis(0));
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 =
                delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

/// Build the segments and rules for a scene.
///
/// Rule construction only fails on configuration mistakes, and every preset
/// here is known-good, so the unwraps cannot fire.
#[allow(clippy::too_many_lines)]
fn build_scene(scene: Scene, now: Instant) -> Stage {
    match scene {
        Scene::Comet => {
            let mut segment = STRIP.segment(0, STRIP_LEN).unwrap();
            segment
                .set_rule(
                    Rule::new()
                        .fill_range(palette::RED, 0, 10)
                        .unwrap()
                        .animate(30.0, now)
                        .unwrap(),
                )
                .unwrap();
            Stage::Single(segment)
        }
        Scene::RainbowFlow => {
            let mut segment = STRIP.segment(0, STRIP_LEN).unwrap();
            segment
                .set_rule(
                    Rule::new()
                        .hue_linear(6.0, HueBasis::Pixel, now)
                        .unwrap()
                        .animate(20.0, now)
                        .unwrap(),
                )
                .unwrap();
            Stage::Single(segment)
        }
        Scene::HueWave => {
            let mut segment = STRIP.segment(0, STRIP_LEN).unwrap();
            segment
                .set_rule(
                    Rule::new()
                        .hue_wave(60.0, 310.0, 2.0, HueBasis::Time, now)
                        .unwrap(),
                )
                .unwrap();
            Stage::Single(segment)
        }
        Scene::Stripes => {
            let mut segment = STRIP.segment(0, STRIP_LEN).unwrap();
            segment
                .set_rule(
                    Rule::new()
                        .stripes(&palette::RAINBOW, 5)
                        .unwrap()
                        .animate(10.0, now)
                        .unwrap(),
                )
                .unwrap();
            Stage::Single(segment)
        }
        Scene::Blink => {
            let mut segment = STRIP.segment(0, STRIP_LEN).unwrap();
            segment
                .set_rule(
                    Rule::new()
                        .stripes(&[palette::RED, palette::WHITE], 10)
                        .unwrap()
                        .blink(
                            Duration::from_millis(400),
                            Duration::from_millis(200),
                            now,
                        )
                        .unwrap(),
                )
                .unwrap();
            Stage::Single(segment)
        }
        Scene::FadeCycle => {
            let mut segment = STRIP.segment(0, STRIP_LEN).unwrap();
            segment
                .set_rule(
                    Rule::new()
                        .fill(palette::PURPLE)
                        .unwrap()
                        .fade_in(Duration::from_secs(2), Duration::from_secs(0), now)
                        .unwrap()
                        .fade_out(Duration::from_secs(2), Duration::from_secs(4), now)
                        .unwrap(),
                )
                .unwrap();
            Stage::Single(segment)
        }
        Scene::MultiRun => {
            // middle segment wired backwards; the run still flows smoothly
            let mut multi: MultiSegment<'static, 4> = MultiSegment::new();
            multi.push(STRIP.segment(0, 50).unwrap(), false).ok().unwrap();
            multi.push(STRIP.segment(100, 50).unwrap(), false).ok().unwrap();
            multi.push(STRIP.segment(100, 150).unwrap(), false).ok().unwrap();
            multi
                .set_rule(
                    Rule::new()
                        .stripes(&palette::RAINBOW, 5)
                        .unwrap()
                        .animate(15.0, now)
                        .unwrap(),
                )
                .unwrap();
            Stage::Multi(multi)
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update synthetic time and render the frame
        self.update_time();
        let now = Instant::from_millis(self.t_ms);
        self.stage.render(now);
        let frame = STRIP.snapshot();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                ui.add_space(8.0);

                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));

                ui.add_space(8.0);

                ui.label("Speed:");
                ui.add(
                    egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                        .logarithmic(true),
                );

                ui.add_space(8.0);

                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Scene:");
                let mut selected = self.scene;
                egui::ComboBox::from_id_salt("scene_selector")
                    .selected_text(self.scene.as_str())
                    .show_ui(ui, |ui| {
                        for scene in Scene::ALL {
                            ui.selectable_value(&mut selected, scene, scene.as_str());
                        }
                    });
                if selected != self.scene {
                    self.switch_scene(selected);
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row =
                (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = STRIP_LEN.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
