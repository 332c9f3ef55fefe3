//! Seams between the slider engine and the page that mounts it

use std::time::Duration;

use crate::config::{EasingType, SliderConfig};

/// Live layout positions of the track and its viewport.
///
/// Both are screen-space x coordinates of the left edges; the engine only
/// uses their difference.
pub trait GeometryProvider {
    fn viewport_left_offset(&self) -> f64;
    fn track_left_offset(&self) -> f64;

    /// Offset currently rendered for the track, relative to its viewport
    fn rendered_offset(&self) -> f64 {
        self.track_left_offset() - self.viewport_left_offset()
    }
}

/// The element the engine moves
pub trait TrackSurface {
    /// Translate the track to `offset` pixels over `transition`
    fn apply_offset(&mut self, offset: f64, transition: Transition);

    fn set_track_width(&mut self, width: f64);
}

/// Everything the engine needs from its host
pub trait SliderHost: GeometryProvider + TrackSurface {}

impl<T: GeometryProvider + TrackSurface> SliderHost for T {}

/// How an offset change is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: EasingType,
}

impl Transition {
    /// No animation, used while the pointer is down
    pub fn immediate(easing: EasingType) -> Self {
        Self {
            duration: Duration::ZERO,
            easing,
        }
    }

    /// The configured settle transition
    pub fn settle(config: &SliderConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.transition_duration_ms),
            easing: config.transition_easing,
        }
    }

    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }

    /// CSS `transition` shorthand for the transform property
    pub fn css(&self) -> String {
        format!(
            "transform {}ms {}",
            self.duration.as_millis(),
            self.easing.css_name()
        )
    }
}
