//! Distance readings delivered by the sensor driver

/// Outcome reported by the sensor for one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SensorStatus {
    /// Valid echo, the distance is meaningful
    Ok = 0,
    /// Echo did not complete in time
    Timeout = 1,
    /// Reading is beyond what the sensor can measure
    OutOfSensorRange = 2,
    /// No echo was received
    NoEcho = 3,
    /// Reading failed validation in the driver
    Invalid = 4,
}

impl SensorStatus {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Ok,
            1 => Self::Timeout,
            2 => Self::OutOfSensorRange,
            3 => Self::NoEcho,
            4 => Self::Invalid,
            _ => return None,
        })
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Timeout => "timeout",
            Self::OutOfSensorRange => "out_of_range",
            Self::NoEcho => "no_echo",
            Self::Invalid => "invalid",
        }
    }
}

/// One distance reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Distance in millimeters, only meaningful with [`SensorStatus::Ok`]
    pub value: u16,
    pub status: SensorStatus,
}

impl Measurement {
    /// Successful reading
    pub const fn ok(value: u16) -> Self {
        Self {
            value,
            status: SensorStatus::Ok,
        }
    }

    /// Failed reading
    pub const fn failed(status: SensorStatus) -> Self {
        Self { value: 0, status }
    }
}
