//! Desktop preview for distance-guide
//!
//! Simulates the distance sensor with a slider and renders the LED strip in a
//! window. Measurements go through the same channel and renderers the firmware
//! uses; ticks are driven from synthetic time.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant as StdInstant;

use distance_guide::{
    Duration, GuideConfig, GuideDisplay, Instant, Measurement, MeasurementChannel,
    MeasurementSender, OutputDriver, Renderer, Rgb, SensorStatus, Zone,
    config::{DEFAULT_LED_COUNT, MAX_LED_COUNT},
};
use eframe::egui::{self};

/// Frame buffer capacity of the preview renderers
const MAX_LEDS: usize = MAX_LED_COUNT as usize;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Measurement channel size
const MEASUREMENT_CHANNEL_SIZE: usize = 8;

/// Interval of the simulated sensor readings
const MEASUREMENT_INTERVAL: Duration = Duration::from_millis(100);

/// Static measurement channel between the simulated sensor and the renderer
static MEASUREMENTS: MeasurementChannel<MEASUREMENT_CHANNEL_SIZE> =
    MeasurementChannel::<MEASUREMENT_CHANNEL_SIZE>::new();

const STATUSES: [SensorStatus; 5] = [
    SensorStatus::Ok,
    SensorStatus::Timeout,
    SensorStatus::OutOfSensorRange,
    SensorStatus::NoEcho,
    SensorStatus::Invalid,
];

/// Simulated strip shared by both renderers, like the real hardware
type SharedPixels = Rc<RefCell<Vec<Rgb>>>;

/// Output driver writing into the shared simulated strip
struct PreviewDriver {
    staging: Vec<Rgb>,
    strip: SharedPixels,
}

impl PreviewDriver {
    fn new(strip: &SharedPixels) -> Self {
        Self {
            staging: vec![Rgb::default(); MAX_LEDS],
            strip: Rc::clone(strip),
        }
    }
}

impl OutputDriver for PreviewDriver {
    fn clear(&mut self) {
        self.staging.fill(Rgb::default());
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.staging.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.strip.borrow_mut().copy_from_slice(&self.staging);
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Distance Guide Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "distance-guide-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Display under preview, rebuilt on configuration changes
    display: GuideDisplay<MAX_LEDS>,
    /// Pixels last transmitted by either renderer
    strip: SharedPixels,
    /// Simulated sensor end of the channel
    sensor: MeasurementSender<'static, MEASUREMENT_CHANNEL_SIZE>,

    // Simulation state
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether time is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Deadline of the next animation tick
    next_tick: Instant,
    /// Deadline of the next simulated reading
    next_reading: Instant,

    // UI state
    /// Simulated distance in millimeters
    distance: u16,
    /// Simulated sensor status
    status: SensorStatus,
    /// Configuration of the current display
    config: GuideConfig,
    /// Last configuration error, if any
    config_error: Option<String>,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let config = GuideConfig {
            led_count: DEFAULT_LED_COUNT,
            min_distance: 100,
            max_distance: 500,
            brightness: 255,
            ..GuideConfig::default()
        };
        let display = GuideDisplay::start(&config, Instant::from_millis(0))
            .unwrap_or_else(|err| panic!("default preview config is invalid: {err}"));

        Self {
            display,
            strip: Rc::new(RefCell::new(vec![Rgb::default(); MAX_LEDS])),
            sensor: MEASUREMENTS.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            next_tick: Instant::from_millis(0),
            next_reading: Instant::from_millis(0),
            distance: 300,
            status: SensorStatus::Ok,
            config,
            config_error: None,
            led_size: LED_SIZE,
        }
    }

    /// Rebuild the display from the edited configuration
    fn restart_display(&mut self) {
        let now = Instant::from_millis(self.t_ms);
        match GuideDisplay::start(&self.config, now) {
            Ok(display) => {
                self.display = display;
                self.config_error = None;
                self.next_tick = now;
                self.next_reading = now;
            }
            Err(err) => self.config_error = Some(err.to_string()),
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.restart_display();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
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

    /// Feed simulated readings and ticks up to the current synthetic time
    fn simulate(&mut self) {
        let now = Instant::from_millis(self.t_ms);
        let period = self.display.tick_period();

        while self.next_reading <= now {
            let measurement = Measurement {
                value: self.distance,
                status: self.status,
            };
            if self.sensor.try_send(measurement).is_err() {
                break;
            }
            self.next_reading += MEASUREMENT_INTERVAL;
        }
        let mut arrivals = Renderer::new(&self.display, PreviewDriver::new(&self.strip));
        arrivals.process_pending(&MEASUREMENTS.receiver());

        let mut ticks = Renderer::new(&self.display, PreviewDriver::new(&self.strip));
        while self.next_tick <= now {
            ticks.on_tick(self.next_tick);
            self.next_tick += period;
        }
    }
}

fn zone_label(zone: Zone, position: Option<u8>) -> String {
    match position {
        Some(position) => format!("{} @ {position}", zone.as_str()),
        None => zone.as_str().to_owned(),
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.simulate();

        // Request continuous repaint for animation
        ctx.request_repaint();

        let state = self.display.snapshot();
        let led_count = usize::from(self.display.strip().led_count());
        let frame: Vec<Rgb> = self.strip.borrow()[..led_count].to_vec();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
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
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <SensorControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Distance (mm):");
                        let max = self.config.max_distance.saturating_add(200);
                        ui.add(egui::Slider::new(&mut self.distance, 0..=max));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Sensor:");
                        egui::ComboBox::from_id_salt("status_selector")
                            .selected_text(self.status.as_str())
                            .show_ui(ui, |ui| {
                                for status in STATUSES {
                                    ui.selectable_value(&mut self.status, status, status.as_str());
                                }
                            });
                    });

                    ui.add_space(4.0);

                    ui.label(format!("Zone: {}", zone_label(state.zone, state.position)));
                });
                // </SensorControls>
            });

            ui.add_space(16.0);

            // <ConfigControls>
            ui.horizontal(|ui| {
                let old = self.config.clone();

                ui.label("LEDs:");
                ui.add(egui::Slider::new(&mut self.config.led_count, 1..=MAX_LED_COUNT));
                ui.add_space(8.0);
                ui.label("Min:");
                ui.add(egui::DragValue::new(&mut self.config.min_distance).range(0u16..=4000u16));
                ui.label("Max:");
                ui.add(egui::DragValue::new(&mut self.config.max_distance).range(0u16..=4000u16));
                ui.add_space(8.0);
                ui.label("Brightness:");
                ui.add(egui::DragValue::new(&mut self.config.brightness).range(0u8..=255u8));
                ui.add_space(8.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));

                if old.led_count != self.config.led_count
                    || old.min_distance != self.config.min_distance
                    || old.max_distance != self.config.max_distance
                    || old.brightness != self.config.brightness
                {
                    self.restart_display();
                }
            });
            if let Some(err) = &self.config_error {
                ui.colored_label(egui::Color32::LIGHT_RED, err);
            }
            // </ConfigControls>

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
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
