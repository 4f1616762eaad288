//! Frame composition
//!
//! Renders one complete strip frame from a render state. Layers are drawn in a
//! fixed order and later layers win on the pixels they touch:
//!
//! 1. Everything off
//! 2. Guidance animation pixel (low brightness)
//! 3. Tracking dot for `TooClose` / `TooFar`
//! 4. Ideal zone fill, replaces the layers above
//! 5. Emergency blink on every tenth LED
//!
//! A `SensorError` zone leaves the strip dark.

use crate::color::{ANIMATION_BRIGHTNESS, OFF, Palette, Rgb, dim};
use crate::config::StripConfig;
use crate::state::RenderState;
use crate::zone::Zone;

/// Spacing of the emergency pattern
const ALERT_SPACING: usize = 10;

/// Frame compositor
#[derive(Debug, Clone)]
pub struct Compositor {
    strip: StripConfig,
    palette: Palette,
    brightness: u8,
}

impl Compositor {
    pub const fn new(strip: StripConfig, palette: Palette, brightness: u8) -> Self {
        Self {
            strip,
            palette,
            brightness,
        }
    }

    pub const fn strip(&self) -> &StripConfig {
        &self.strip
    }

    /// Compose a frame into `buffer`
    ///
    /// Returns the first `led_count` pixels of the buffer, which hold the frame.
    /// A buffer shorter than the strip is filled as far as it goes.
    pub fn compose<'a>(&self, state: &RenderState, buffer: &'a mut [Rgb]) -> &'a [Rgb] {
        let len = usize::from(self.strip.led_count()).min(buffer.len());
        let frame = &mut buffer[..len];

        frame.fill(OFF);

        match state.zone {
            Zone::TooClose | Zone::TooFar => {
                self.draw_animation(state, frame);
                if let Some(position) = state.position {
                    self.set(frame, usize::from(position), self.palette.tracking);
                }
            }
            Zone::OutOfRangeFar => self.draw_animation(state, frame),
            Zone::Ideal => {
                let stop = self.full(self.palette.stop);
                for index in self.strip.ideal_range() {
                    Self::put(frame, usize::from(index), stop);
                }
            }
            Zone::Emergency => {
                if state.blink.is_on() {
                    let alert = self.full(self.palette.alert);
                    for pixel in frame.iter_mut().step_by(ALERT_SPACING) {
                        *pixel = alert;
                    }
                }
            }
            Zone::SensorError => {}
        }

        frame
    }

    fn draw_animation(&self, state: &RenderState, frame: &mut [Rgb]) {
        let animation = &state.animation;
        let Some(direction) = animation.direction() else {
            return;
        };
        let color = dim(direction.color(&self.palette), ANIMATION_BRIGHTNESS);
        Self::put(frame, usize::from(animation.current_position()), color);
    }

    fn set(&self, frame: &mut [Rgb], index: usize, color: Rgb) {
        Self::put(frame, index, self.full(color));
    }

    /// Color at the configured output brightness
    const fn full(&self, color: Rgb) -> Rgb {
        dim(color, self.brightness)
    }

    fn put(frame: &mut [Rgb], index: usize, color: Rgb) {
        if let Some(pixel) = frame.get_mut(index) {
            *pixel = color;
        }
    }
}
