use smart_leds::RGB8;

use crate::math8::scale8;

pub type Rgb = RGB8;

pub const OFF: Rgb = rgb_from_u32(0x00_00_00);
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_A5_00);

/// Brightness of the guidance animation (2% of full scale)
pub const ANIMATION_BRIGHTNESS: u8 = 5;

/// Colors of the rendered layers
///
/// Each color is given at full scale; brightness is applied by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Tracking dot outside the ideal zone
    pub tracking: Rgb,
    /// Ideal zone fill
    pub stop: Rgb,
    /// Emergency blink pattern
    pub alert: Rgb,
    /// Animation moving up the strip, toward the ideal zone from the near end
    pub forward: Rgb,
    /// Animation moving down the strip, toward the ideal zone from the far end
    pub backward: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tracking: GREEN,
            stop: RED,
            alert: RED,
            forward: ORANGE,
            backward: BLUE,
        }
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale every channel of a color (0-255 = 0.0-1.0)
#[inline]
pub const fn dim(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}
