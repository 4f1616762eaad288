//! Display configuration and ideal zone derivation
//!
//! [`GuideConfig`] carries the raw parameters of a display. It is validated once
//! into a [`StripConfig`], which holds the strip geometry together with the ideal
//! zone boundaries derived from the strip length.

use core::fmt;
use core::ops::RangeInclusive;

use embassy_time::Duration;

use crate::color::Palette;

/// Largest strip the display accepts
pub const MAX_LED_COUNT: u8 = 100;

/// Default number of LEDs in the strip
pub const DEFAULT_LED_COUNT: u8 = 40;

/// Default lower bound of the guided range (10 cm)
pub const DEFAULT_MIN_DISTANCE_MM: u16 = 100;

/// Default upper bound of the guided range (4 m)
pub const DEFAULT_MAX_DISTANCE_MM: u16 = 4000;

/// Lowest accepted output brightness, keeps the strip from going fully dim
pub const MIN_BRIGHTNESS: u8 = 10;

/// Default output brightness (50%)
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Default period of the animation tick (10 Hz)
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Default period of the emergency blink (1 Hz)
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(1000);

/// Ideal zone size in percent of the strip length
const IDEAL_SIZE_PERCENT: u16 = 10;

/// Ideal zone center in percent of the strip length
const IDEAL_CENTER_PERCENT: u16 = 30;

/// Configuration rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// LED count is zero or above [`MAX_LED_COUNT`]
    InvalidLedCount(u8),
    /// LED count does not fit into the frame buffer
    LedCountExceedsBuffer { led_count: u8, capacity: usize },
    /// Minimum distance is not below the maximum distance
    InvalidDistanceRange { min: u16, max: u16 },
    /// Brightness is below [`MIN_BRIGHTNESS`]
    BrightnessTooLow(u8),
    /// Tick or blink period is zero
    InvalidPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLedCount(count) => {
                write!(f, "led count {count} is outside 1..={MAX_LED_COUNT}")
            }
            Self::LedCountExceedsBuffer {
                led_count,
                capacity,
            } => write!(
                f,
                "led count {led_count} exceeds frame buffer capacity {capacity}"
            ),
            Self::InvalidDistanceRange { min, max } => {
                write!(f, "distance range {min}..{max} mm is empty")
            }
            Self::BrightnessTooLow(brightness) => {
                write!(f, "brightness {brightness} is below {MIN_BRIGHTNESS}")
            }
            Self::InvalidPeriod => f.write_str("tick and blink periods must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Raw configuration of a guidance display
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// Number of LEDs in the strip
    pub led_count: u8,
    /// Distance mapped to the first LED, in millimeters
    pub min_distance: u16,
    /// Distance mapped to the last LED, in millimeters
    pub max_distance: u16,
    /// Output brightness of the primary indicators
    pub brightness: u8,
    /// Period of the animation and blink tick
    pub tick_period: Duration,
    /// Full on/off period of the emergency blink
    pub blink_period: Duration,
    /// Colors of the rendered layers
    pub palette: Palette,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            min_distance: DEFAULT_MIN_DISTANCE_MM,
            max_distance: DEFAULT_MAX_DISTANCE_MM,
            brightness: DEFAULT_BRIGHTNESS,
            tick_period: DEFAULT_TICK_PERIOD,
            blink_period: DEFAULT_BLINK_PERIOD,
            palette: Palette::default(),
        }
    }
}

impl GuideConfig {
    /// Validate the configuration against a frame buffer of `capacity` pixels
    ///
    /// Returns the strip geometry on success.
    pub fn validate(&self, capacity: usize) -> Result<StripConfig, ConfigError> {
        if usize::from(self.led_count) > capacity {
            return Err(ConfigError::LedCountExceedsBuffer {
                led_count: self.led_count,
                capacity,
            });
        }
        if self.brightness < MIN_BRIGHTNESS {
            return Err(ConfigError::BrightnessTooLow(self.brightness));
        }
        if self.tick_period.as_ticks() == 0 || self.blink_period.as_ticks() == 0 {
            return Err(ConfigError::InvalidPeriod);
        }
        StripConfig::new(self.led_count, self.min_distance, self.max_distance)
    }
}

/// Strip geometry with the derived ideal zone
///
/// Immutable after construction. The ideal zone always holds at least one LED and
/// `ideal_start <= ideal_end <= led_count - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    led_count: u8,
    min_distance: u16,
    max_distance: u16,
    ideal_start: u8,
    ideal_end: u8,
}

impl StripConfig {
    /// Build the strip geometry and derive the ideal zone
    pub const fn new(
        led_count: u8,
        min_distance: u16,
        max_distance: u16,
    ) -> Result<Self, ConfigError> {
        if led_count == 0 || led_count > MAX_LED_COUNT {
            return Err(ConfigError::InvalidLedCount(led_count));
        }
        if min_distance >= max_distance {
            return Err(ConfigError::InvalidDistanceRange {
                min: min_distance,
                max: max_distance,
            });
        }

        let (ideal_start, ideal_end) = ideal_zone(led_count);
        Ok(Self {
            led_count,
            min_distance,
            max_distance,
            ideal_start,
            ideal_end,
        })
    }

    pub const fn led_count(&self) -> u8 {
        self.led_count
    }

    /// Index of the last LED
    pub const fn last_index(&self) -> u8 {
        self.led_count - 1
    }

    pub const fn min_distance(&self) -> u16 {
        self.min_distance
    }

    pub const fn max_distance(&self) -> u16 {
        self.max_distance
    }

    /// First LED of the ideal zone
    pub const fn ideal_start(&self) -> u8 {
        self.ideal_start
    }

    /// Last LED of the ideal zone (inclusive)
    pub const fn ideal_end(&self) -> u8 {
        self.ideal_end
    }

    /// Inclusive range of the ideal zone
    pub const fn ideal_range(&self) -> RangeInclusive<u8> {
        self.ideal_start..=self.ideal_end
    }
}

/// Derive the ideal zone boundaries for a strip of `led_count` LEDs
///
/// `led_count` must be at least 1.
#[allow(clippy::cast_possible_truncation)]
const fn ideal_zone(led_count: u8) -> (u8, u8) {
    let count = led_count as u16;
    let last = count - 1;

    let mut size = count * IDEAL_SIZE_PERCENT / 100;
    if size == 0 {
        size = 1;
    }
    let center = count * IDEAL_CENTER_PERCENT / 100;

    let mut start = center.saturating_sub(size / 2);
    if start > last {
        start = last;
    }
    let mut end = start + size - 1;
    if end > last {
        end = last;
    }

    (start as u8, end as u8)
}
