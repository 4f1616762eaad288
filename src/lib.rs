#![no_std]

pub mod animation;
pub mod blink;
pub mod color;
pub mod compositor;
pub mod config;
pub mod display;
pub mod math8;
pub mod measurement;
pub mod scheduler;
pub mod state;
pub mod zone;

pub use animation::{AnimationState, Direction};
pub use blink::BlinkState;
pub use compositor::Compositor;
pub use config::{ConfigError, GuideConfig, StripConfig};
pub use display::{GuideDisplay, Renderer};
pub use measurement::{Measurement, SensorStatus};
pub use scheduler::{
    MeasurementChannel, MeasurementReceiver, MeasurementSender, TickResult, TickScheduler, run,
    run_measurements,
};
pub use state::RenderState;
pub use zone::{Zone, classify, map_position};

pub use color::{Palette, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Renderers are generic over this trait.
pub trait OutputDriver {
    /// Turn every pixel of the driver's buffer off
    fn clear(&mut self);

    /// Set one pixel of the driver's buffer
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Transmit the buffer to the strip
    fn show(&mut self);

    /// Write a complete frame as one hardware update
    ///
    /// Clears the buffer, sets every lit pixel and transmits once.
    fn write(&mut self, frame: &[Rgb]) {
        self.clear();
        for (index, pixel) in frame.iter().enumerate() {
            if *pixel != color::OFF {
                self.set_pixel(index, *pixel);
            }
        }
        self.show();
    }
}
