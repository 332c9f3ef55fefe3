//! Settle animation for hosts that render the track themselves
//!
//! [`AnimatedTrack`] plays the role a browser plays for a CSS transition: it
//! remembers the last offset the slider applied, interpolates toward it over
//! the requested transition, and reports the interpolated position back as
//! the track's layout offset.

use std::time::Duration;

use crate::clock::Clock;
use crate::host::{GeometryProvider, TrackSurface, Transition};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active settle animation state
#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    start: Duration,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

impl ActiveAnimation {
    fn sample(&self, now: Duration) -> f64 {
        if is_complete(self.start, now, self.duration) {
            return self.to;
        }
        let t = progress(self.start, now, self.duration);
        lerp(self.from, self.to, self.easing.apply(t))
    }
}

/// Track surface and geometry backed by an in-memory animated offset.
///
/// Call `update()` each frame to get the current interpolated offset.
#[derive(Debug, Clone)]
pub struct AnimatedTrack<C> {
    clock: C,
    viewport_left: f64,
    /// Offset when no animation is active, or the animation's origin
    offset: f64,
    animation: Option<ActiveAnimation>,
    width: f64,
}

impl<C: Clock> AnimatedTrack<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            viewport_left: 0.0,
            offset: 0.0,
            animation: None,
            width: 0.0,
        }
    }

    /// Place the viewport's left edge at `left` in screen coordinates
    pub fn with_viewport_left(mut self, left: f64) -> Self {
        self.viewport_left = left;
        self
    }

    /// Start resting at `offset`
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Width most recently assigned by the slider
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Check if an animation is still running at the current time
    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|a| !is_complete(a.start, self.clock.now(), a.duration))
    }

    /// Final offset once the running animation (if any) ends
    pub fn target_offset(&self) -> f64 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.offset)
    }

    /// Interpolated offset at the current time
    pub fn current_offset(&self) -> f64 {
        match &self.animation {
            Some(animation) => animation.sample(self.clock.now()),
            None => self.offset,
        }
    }

    /// Advance the animation and return the current offset
    ///
    /// Drops the animation once it has finished.
    pub fn update(&mut self) -> f64 {
        if let Some(animation) = self.animation {
            let now = self.clock.now();
            if is_complete(animation.start, now, animation.duration) {
                self.offset = animation.to;
                self.animation = None;
            }
        }
        self.current_offset()
    }

    /// Stop any active animation at the currently visible offset
    pub fn cancel(&mut self) {
        self.offset = self.current_offset();
        self.animation = None;
    }
}

impl<C: Clock> GeometryProvider for AnimatedTrack<C> {
    fn viewport_left_offset(&self) -> f64 {
        self.viewport_left
    }

    fn track_left_offset(&self) -> f64 {
        self.viewport_left + self.current_offset()
    }
}

impl<C: Clock> TrackSurface for AnimatedTrack<C> {
    fn apply_offset(&mut self, offset: f64, transition: Transition) {
        // Like a CSS transition, a new target starts from what is on screen
        let from = self.current_offset();

        if transition.is_immediate() || from == offset {
            self.offset = offset;
            self.animation = None;
            return;
        }

        self.offset = from;
        self.animation = Some(ActiveAnimation {
            start: self.clock.now(),
            from,
            to: offset,
            duration: transition.duration,
            easing: transition.easing,
        });
    }

    fn set_track_width(&mut self, width: f64) {
        self.width = width;
    }
}
