//! Render scheduling
//!
//! [`GuideDisplay`] owns the single shared [`RenderState`] behind one
//! critical-section mutex. Both triggers (measurement arrival and the periodic
//! tick) mutate it through the display and get a copy back; a [`Renderer`] then
//! composes and transmits the frame after the lock has been released.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{OFF, Rgb};
use crate::compositor::Compositor;
use crate::config::{ConfigError, GuideConfig, StripConfig};
use crate::measurement::Measurement;
use crate::scheduler::MeasurementReceiver;
use crate::state::RenderState;
use crate::zone::{Zone, classify};

/// Guidance display - owner of the shared render state
///
/// `MAX_LEDS` is the capacity of the frame buffers used by its renderers.
pub struct GuideDisplay<const MAX_LEDS: usize> {
    compositor: Compositor,
    tick_period: Duration,
    state: Mutex<RefCell<RenderState>>,
}

impl<const MAX_LEDS: usize> GuideDisplay<MAX_LEDS> {
    /// Validate the configuration and create the display
    ///
    /// The display starts dark until the first measurement arrives. To change
    /// the configuration, build a new display.
    pub fn start(config: &GuideConfig, now: Instant) -> Result<Self, ConfigError> {
        let strip = config.validate(MAX_LEDS)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[GuideDisplay.start] {}-{} mm -> LEDs 0-{}, ideal zone {}-{}",
            strip.min_distance(),
            strip.max_distance(),
            strip.last_index(),
            strip.ideal_start(),
            strip.ideal_end()
        );

        Ok(Self {
            compositor: Compositor::new(strip, config.palette, config.brightness),
            tick_period: config.tick_period,
            state: Mutex::new(RefCell::new(RenderState::new(config.blink_period, now))),
        })
    }

    pub const fn strip(&self) -> &StripConfig {
        self.compositor.strip()
    }

    pub const fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Period of the animation tick
    pub const fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Copy of the current render state
    pub fn snapshot(&self) -> RenderState {
        critical_section::with(|cs| *self.state.borrow(cs).borrow())
    }

    /// Apply a new measurement
    ///
    /// Classifies the reading, drives the animation transition and stores the
    /// new zone and position. Returns the state to render.
    pub fn on_measurement(&self, measurement: Measurement) -> RenderState {
        let strip = self.strip();
        let (previous, snapshot) = critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            let previous = state.zone;

            let (zone, position) = classify(measurement, strip);
            state.animation.transition(zone, strip);
            state.zone = zone;
            state.position = position;

            (previous, *state)
        });

        if previous != snapshot.zone {
            log_zone_change(previous, &snapshot);
        }

        snapshot
    }

    /// Advance the animation and the blink by one tick
    ///
    /// Returns the state to render.
    pub fn on_tick(&self, now: Instant) -> RenderState {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            state.animation.advance();
            state.blink.advance(now);
            *state
        })
    }
}

#[cfg(feature = "esp32-log")]
fn log_zone_change(previous: Zone, state: &RenderState) {
    println!(
        "[GuideDisplay.on_measurement] zone {} -> {} (position {:?}, animation {:?})",
        previous.as_str(),
        state.zone.as_str(),
        state.position,
        state.animation.direction()
    );
}

#[cfg(not(feature = "esp32-log"))]
fn log_zone_change(_previous: Zone, _state: &RenderState) {}

/// Renderer - composes frames and writes them to an output driver
///
/// Each execution context that triggers renders (the measurement path, the tick
/// path) owns its own renderer and frame buffer; all of them share one display.
pub struct Renderer<'a, D: OutputDriver, const MAX_LEDS: usize> {
    display: &'a GuideDisplay<MAX_LEDS>,
    driver: D,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize> Renderer<'a, D, MAX_LEDS> {
    pub fn new(display: &'a GuideDisplay<MAX_LEDS>, driver: D) -> Self {
        Self {
            display,
            driver,
            frame_buffer: [OFF; MAX_LEDS],
        }
    }

    pub const fn display(&self) -> &'a GuideDisplay<MAX_LEDS> {
        self.display
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Apply a measurement, then render and transmit a frame
    pub fn on_measurement(&mut self, measurement: Measurement) -> &[Rgb] {
        let state = self.display.on_measurement(measurement);
        self.commit(&state)
    }

    /// Advance one tick, then render and transmit a frame
    pub fn on_tick(&mut self, now: Instant) -> &[Rgb] {
        let state = self.display.on_tick(now);
        self.commit(&state)
    }

    /// Render every queued measurement (non-blocking)
    ///
    /// Returns the number of measurements processed.
    pub fn process_pending<const N: usize>(
        &mut self,
        measurements: &MeasurementReceiver<'_, N>,
    ) -> usize {
        let mut processed = 0;
        while let Ok(measurement) = measurements.try_receive() {
            self.on_measurement(measurement);
            processed += 1;
        }
        processed
    }

    /// Transmit an all-off frame without touching the shared state
    pub fn blank(&mut self) {
        let len = usize::from(self.display.strip().led_count()).min(MAX_LEDS);
        let frame = &mut self.frame_buffer[..len];
        frame.fill(OFF);
        self.driver.write(frame);
    }

    /// Compose a frame from a state copy and transmit it as one update
    fn commit(&mut self, state: &RenderState) -> &[Rgb] {
        let frame = self
            .display
            .compositor
            .compose(state, &mut self.frame_buffer);
        self.driver.write(frame);
        frame
    }
}
