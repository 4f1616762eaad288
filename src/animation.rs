//! Looping guidance animation
//!
//! A single low-brightness pixel that walks from the far end of the current
//! zone toward the ideal zone, then jumps back and starts over. It runs while
//! the object is outside the ideal zone and stops in every other zone.

use crate::color::{Palette, Rgb};
use crate::config::StripConfig;
use crate::zone::Zone;

/// Direction of the animation along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From index 0 up to the start of the ideal zone
    Forward,
    /// From the last index down to the end of the ideal zone
    Backward,
}

impl Direction {
    /// Direction required by a zone, `None` for zones without animation
    pub const fn for_zone(zone: Zone) -> Option<Self> {
        match zone {
            Zone::TooClose => Some(Self::Forward),
            Zone::TooFar | Zone::OutOfRangeFar => Some(Self::Backward),
            Zone::Ideal | Zone::Emergency | Zone::SensorError => None,
        }
    }

    pub const fn color(self, palette: &Palette) -> Rgb {
        match self {
            Self::Forward => palette.forward,
            Self::Backward => palette.backward,
        }
    }
}

/// Animation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    active: bool,
    direction: Direction,
    current_position: u8,
    start_pos: u8,
    end_pos: u8,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Create an inactive animation
    pub const fn new() -> Self {
        Self {
            active: false,
            direction: Direction::Forward,
            current_position: 0,
            start_pos: 0,
            end_pos: 0,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Direction of the running animation, `None` when inactive
    pub const fn direction(&self) -> Option<Direction> {
        if self.active {
            Some(self.direction)
        } else {
            None
        }
    }

    pub const fn current_position(&self) -> u8 {
        self.current_position
    }

    pub const fn start_pos(&self) -> u8 {
        self.start_pos
    }

    pub const fn end_pos(&self) -> u8 {
        self.end_pos
    }

    /// Follow a zone change
    ///
    /// Starts, restarts or stops the animation depending on the zone. Staying in
    /// the same direction keeps the current position so repeated measurements do
    /// not make the animation stutter.
    ///
    /// Returns `true` if the animation was (re)started from its start position.
    pub fn transition(&mut self, zone: Zone, strip: &StripConfig) -> bool {
        let Some(direction) = Direction::for_zone(zone) else {
            self.active = false;
            return false;
        };

        if self.active && self.direction == direction {
            return false;
        }

        let (start_pos, end_pos) = match direction {
            Direction::Forward => (0, strip.ideal_start()),
            Direction::Backward => (strip.last_index(), strip.ideal_end()),
        };
        *self = Self {
            active: true,
            direction,
            current_position: start_pos,
            start_pos,
            end_pos,
        };
        true
    }

    /// Move one step toward the end position, wrapping back to the start
    ///
    /// Does nothing while inactive.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }

        if self.current_position == self.end_pos {
            self.current_position = self.start_pos;
            return;
        }

        self.current_position = match self.direction {
            Direction::Forward => self.current_position.saturating_add(1).min(self.end_pos),
            Direction::Backward => self.current_position.saturating_sub(1).max(self.end_pos),
        };
    }
}
