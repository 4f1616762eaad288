//! Trigger scheduling
//!
//! Drives the two render triggers of a display:
//! - the periodic tick, paced by [`TickScheduler`]
//! - measurement arrival, fed through a [`MeasurementChannel`]
//!
//! [`TickScheduler::tick`] is portable and leaves sleeping to the caller. The
//! async loops wrap both triggers for an embassy executor.

use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Instant, Timer};

use crate::OutputDriver;
use crate::display::{GuideDisplay, Renderer};
use crate::measurement::Measurement;

/// Type alias for the measurement channel fed by the sensor driver
pub type MeasurementChannel<const SIZE: usize> =
    Channel<CriticalSectionRawMutex, Measurement, SIZE>;

/// Type alias for measurement sender
pub type MeasurementSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, Measurement, SIZE>;

/// Type alias for measurement receiver
pub type MeasurementReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, Measurement, SIZE>;

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Advances the display and transmits a frame on every tick
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(Renderer::new(&display, driver));
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler<'a, D: OutputDriver, const MAX_LEDS: usize> {
    renderer: Renderer<'a, D, MAX_LEDS>,
    next_tick: Instant,
    period: Duration,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize> TickScheduler<'a, D, MAX_LEDS> {
    /// Create a new tick scheduler using the display's tick period.
    pub fn new(renderer: Renderer<'a, D, MAX_LEDS>) -> Self {
        let period = renderer.display().tick_period();
        Self::with_period(renderer, period)
    }

    /// Create a new tick scheduler with custom period.
    pub fn with_period(renderer: Renderer<'a, D, MAX_LEDS>, period: Duration) -> Self {
        Self {
            renderer,
            next_tick: Instant::from_millis(0),
            period,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// If we've fallen behind by more than two periods, the backlog is skipped
    /// instead of being caught up in a burst.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.period * 2;
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        self.renderer.on_tick(now);

        self.next_tick += self.period;

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration: self.next_tick.saturating_duration_since(now),
        }
    }

    /// Tick forever, sleeping until each deadline.
    pub async fn run(mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            Timer::at(result.next_deadline).await;
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, D, MAX_LEDS> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, D, MAX_LEDS> {
        &mut self.renderer
    }
}

/// Render every measurement as soon as it arrives, forever.
pub async fn run_measurements<D: OutputDriver, const MAX_LEDS: usize, const SIZE: usize>(
    mut renderer: Renderer<'_, D, MAX_LEDS>,
    measurements: MeasurementReceiver<'_, SIZE>,
) -> ! {
    loop {
        let measurement = measurements.receive().await;
        renderer.on_measurement(measurement);
    }
}

/// Run both triggers of a display until the process ends.
///
/// `tick_driver` and `measurement_driver` write to the same strip; the tick
/// path and the measurement path each render with their own frame buffer.
/// On multi-threaded targets the two drivers must serialise access to the LED
/// bus so that one frame's clear/set/show sequence never interleaves with the
/// other's.
pub async fn run<T, M, const MAX_LEDS: usize, const SIZE: usize>(
    display: &GuideDisplay<MAX_LEDS>,
    tick_driver: T,
    measurement_driver: M,
    measurements: MeasurementReceiver<'_, SIZE>,
) -> !
where
    T: OutputDriver,
    M: OutputDriver,
{
    let ticks = TickScheduler::new(Renderer::new(display, tick_driver));
    let arrivals = run_measurements(Renderer::new(display, measurement_driver), measurements);

    let (never, _) = join(ticks.run(), arrivals).await;
    never
}
