//! Distance classification
//!
//! Maps a [`Measurement`] onto one of the six display zones and, for valid
//! in-range readings, onto a strip index.

use crate::config::StripConfig;
use crate::math8::interpolate;
use crate::measurement::Measurement;

/// Classification of the latest measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// In range, before the ideal zone
    TooClose,
    /// Inside the ideal zone (inclusive on both ends)
    Ideal,
    /// In range, past the ideal zone
    TooFar,
    /// Closer than the minimum distance
    Emergency,
    /// Farther than the maximum distance
    OutOfRangeFar,
    /// Sensor did not deliver a valid reading
    SensorError,
}

impl Zone {
    /// Zones that carry a strip position
    pub const fn has_position(self) -> bool {
        matches!(self, Self::TooClose | Self::Ideal | Self::TooFar)
    }

    /// Zones that run the guidance animation
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::TooClose | Self::TooFar | Self::OutOfRangeFar)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooClose => "too_close",
            Self::Ideal => "ideal",
            Self::TooFar => "too_far",
            Self::Emergency => "emergency",
            Self::OutOfRangeFar => "out_of_range_far",
            Self::SensorError => "sensor_error",
        }
    }
}

/// Map a distance onto a strip index
///
/// Linear interpolation of `value` over `[min_distance, max_distance]` onto
/// `[0, led_count - 1]`. Values outside the range saturate to the ends.
pub const fn map_position(value: u16, strip: &StripConfig) -> u8 {
    let min = strip.min_distance();
    let offset = value.saturating_sub(min);
    let span = strip.max_distance() - min;

    let position = interpolate(offset, span, strip.last_index());
    if position > strip.last_index() {
        strip.last_index()
    } else {
        position
    }
}

/// Classify a measurement
///
/// The sensor status is checked first, then the distance range. Only a valid,
/// in-range reading yields a position.
pub fn classify(measurement: Measurement, strip: &StripConfig) -> (Zone, Option<u8>) {
    if !measurement.status.is_ok() {
        return (Zone::SensorError, None);
    }
    if measurement.value < strip.min_distance() {
        return (Zone::Emergency, None);
    }
    if measurement.value > strip.max_distance() {
        return (Zone::OutOfRangeFar, None);
    }

    let position = map_position(measurement.value, strip);
    let zone = if position < strip.ideal_start() {
        Zone::TooClose
    } else if position > strip.ideal_end() {
        Zone::TooFar
    } else {
        Zone::Ideal
    };

    (zone, Some(position))
}
