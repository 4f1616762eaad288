use embassy_time::{Duration, Instant};

use crate::animation::AnimationState;
use crate::blink::BlinkState;
use crate::zone::Zone;

/// Mutable state shared by the measurement and tick paths
///
/// Small and `Copy`: a render pass works on a copy taken under the lock, so the
/// frame can be composed and transmitted after the lock is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Zone of the latest measurement
    pub zone: Zone,
    /// Strip index of the latest measurement, only for zones with a position
    pub position: Option<u8>,
    pub animation: AnimationState,
    pub blink: BlinkState,
}

impl RenderState {
    /// Initial state: no valid reading yet, dark strip
    pub fn new(blink_period: Duration, now: Instant) -> Self {
        Self {
            zone: Zone::SensorError,
            position: None,
            animation: AnimationState::new(),
            blink: BlinkState::new(blink_period, now),
        }
    }
}
