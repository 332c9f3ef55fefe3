//! Per-gesture bookkeeping owned by the slider

use std::time::Duration;

use crate::config::DEFAULT_PULL_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down but has not moved yet
    Armed,
    Dragging,
    /// Release in progress; only observable from inside the host callbacks
    Settling,
}

/// Horizontal pointer direction of a drag.
///
/// `Left` means the pointer moved left, which scrolls toward later cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction of a signed travel `start_x - latest_x`; `None` when zero
    pub fn from_travel(travel: f64) -> Option<Self> {
        if travel > 0.0 {
            Some(Direction::Left)
        } else if travel < 0.0 {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub(crate) phase: GesturePhase,
    pub(crate) start_x: f64,
    pub(crate) latest_x: f64,
    pub(crate) start_time: Duration,
    /// Rendered offset when the gesture started
    pub(crate) start_offset: f64,
    /// Last release had to be pulled back inside the track
    pub(crate) position_correction: bool,
    pub(crate) pull_limit: f64,
    pub(crate) last_resting_offset: f64,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new(DEFAULT_PULL_LIMIT)
    }
}

impl GestureState {
    pub fn new(pull_limit: f64) -> Self {
        Self {
            phase: GesturePhase::Idle,
            start_x: 0.0,
            latest_x: 0.0,
            start_time: Duration::ZERO,
            start_offset: 0.0,
            position_correction: false,
            pull_limit,
            last_resting_offset: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    pub fn latest_x(&self) -> f64 {
        self.latest_x
    }

    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    pub fn position_correction(&self) -> bool {
        self.position_correction
    }

    pub fn pull_limit(&self) -> f64 {
        self.pull_limit
    }

    pub fn last_resting_offset(&self) -> f64 {
        self.last_resting_offset
    }

    /// Signed pointer travel, positive when the pointer moved left
    #[inline]
    pub fn travel(&self) -> f64 {
        self.start_x - self.latest_x
    }

    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_travel(self.travel())
    }

    /// Undamped offset that follows the pointer exactly
    #[inline]
    pub fn drag_offset(&self) -> f64 {
        self.start_offset - self.travel()
    }

    pub(crate) fn capture(&mut self, x: f64, now: Duration, rendered_offset: f64) {
        self.start_x = x;
        self.latest_x = x;
        self.start_time = now;
        self.start_offset = rendered_offset;
        self.position_correction = false;
    }

    pub(crate) fn clear(&mut self) {
        self.phase = GesturePhase::Idle;
        self.start_x = 0.0;
        self.latest_x = 0.0;
        self.start_time = Duration::ZERO;
        self.start_offset = 0.0;
    }
}
