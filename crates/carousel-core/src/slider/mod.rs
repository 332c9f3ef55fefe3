//! Carousel slider engine
//!
//! Turns pointer samples into track offsets. While the pointer is down the
//! track follows it one-to-one, with rubber-band resistance past either end.
//! On release the track settles: in free-scroll mode it carries the drag's
//! velocity, and in both modes it is pulled back inside the track when the
//! drag left it hanging past an edge.
//!
//! The engine is single-threaded and synchronous. Every handler runs to
//! completion and reports its only side effect through the host's
//! [`TrackSurface`].

pub mod gesture;
pub mod pull;

use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::SliderConfig;
use crate::geometry::TrackMetrics;
use crate::host::{SliderHost, Transition};
use crate::items::ItemSet;

pub use gesture::{Direction, GesturePhase, GestureState};
pub use pull::{Edge, PullInput, Pulled};

/// Outcome of a non-delegated release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    /// Where the pointer left the track, before damping
    pub release_offset: f64,
    pub direction: Option<Direction>,
    /// Extra travel from release velocity, free-scroll only
    pub inertia: Option<f64>,
    /// Offset the track was sent to
    pub offset: f64,
    /// Alignment moved the offset back to an edge
    pub corrected: bool,
}

/// Drag-driven carousel track bound to a host, an item set and a clock
pub struct Slider<H, I, C = SystemClock> {
    config: SliderConfig,
    host: H,
    items: I,
    clock: C,
    metrics: TrackMetrics,
    state: GestureState,
}

impl<H: SliderHost, I: ItemSet> Slider<H, I, SystemClock> {
    /// Bind the slider to its host and items and size the track
    pub fn new(config: SliderConfig, host: H, items: I) -> Self {
        Self::with_clock(config, host, items, SystemClock::new())
    }
}

impl<H: SliderHost, I: ItemSet, C: Clock> Slider<H, I, C> {
    /// Like [`Slider::new`], reading gesture timestamps from `clock`
    pub fn with_clock(config: SliderConfig, host: H, items: I, clock: C) -> Self {
        let metrics = TrackMetrics::new(&config, items.count());
        let mut slider = Self {
            config,
            host,
            items,
            clock,
            metrics,
            state: GestureState::default(),
        };
        slider.apply_width();
        slider
    }

    pub fn set_pull_limit(&mut self, pull_limit: f64) {
        self.state.pull_limit = pull_limit;
    }

    /// Swap in a new configuration.
    ///
    /// Resizes the track but leaves its offset alone.
    pub fn update_config(&mut self, config: SliderConfig) {
        info!(
            "Slider config updated: visible_width={} cell={}+{} free_scroll={}",
            config.visible_width, config.cell_width, config.cell_margin, config.free_scroll
        );
        self.config = config;
        self.refresh_metrics();
    }

    /// Replace the item set, resizing the track for the new count
    pub fn set_items(&mut self, items: I) {
        self.items = items;
        self.refresh_metrics();
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn items(&self) -> &I {
        &self.items
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn metrics(&self) -> &TrackMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.metrics.disabled
    }

    /// Whether `offset` lies past either end of the track
    pub fn detect_pulled(&self, offset: f64) -> Option<Pulled> {
        pull::detect_pulled(offset, self.metrics.end_position)
    }

    /// Rubber-banded replacement for `offset`; `0.0` if it is not pulled
    pub fn dampen(&self, offset: f64) -> f64 {
        pull::dampen(self.detect_pulled(offset), &self.pull_input())
    }

    pub fn on_pointer_down(&mut self, x: f64) {
        if self.is_disabled() {
            return;
        }

        self.begin_gesture(x);
        self.state.phase = GesturePhase::Armed;
    }

    /// Follow the pointer to `x`, returning the offset applied to the track
    pub fn on_pointer_move(&mut self, x: f64) -> Option<f64> {
        if self.is_disabled() {
            return None;
        }

        // A gesture starts on its first move even if the down was missed
        if !self.state.is_dragging() {
            self.begin_gesture(x);
            self.state.phase = GesturePhase::Dragging;
        }

        self.state.latest_x = x;

        let mut offset = self.state.drag_offset();
        let pulled = self.detect_pulled(offset);
        let direction = self.state.direction();

        if let (Some(p), Some(d)) = (pulled, direction) {
            if p.edge.resists(d) {
                offset = pull::dampen(pulled, &self.pull_input());
            }
        }

        self.host
            .apply_offset(offset, Transition::immediate(self.config.transition_easing));

        if self.config.free_scroll {
            self.state.last_resting_offset = offset;
        }

        if let Some(p) = pulled {
            if p.overflow > self.state.pull_limit {
                self.state.last_resting_offset = match p.edge {
                    Edge::Left => 0.0,
                    Edge::Right => offset,
                };
            }
        }

        trace!(
            "drag x={:.1} travel={:.1} offset={:.1} pulled={:?}",
            x,
            self.state.travel(),
            offset,
            pulled
        );

        Some(offset)
    }

    /// Release the pointer.
    ///
    /// `delegated` releases were already settled by an inner handler and
    /// only end the drag.
    pub fn on_pointer_up(&mut self, delegated: bool) -> Option<Settlement> {
        if self.is_disabled() {
            return None;
        }

        if delegated {
            self.state.phase = GesturePhase::Idle;
            return None;
        }

        self.state.phase = GesturePhase::Settling;
        let settlement = self.settle();
        self.state.clear();

        Some(settlement)
    }

    fn begin_gesture(&mut self, x: f64) {
        let now = self.clock.now();
        let rendered_offset = self.host.rendered_offset();
        self.state.capture(x, now, rendered_offset);

        debug!(
            "Gesture start x={:.1} offset={:.1} at {:?}",
            x, rendered_offset, now
        );
    }

    fn settle(&mut self) -> Settlement {
        let release_offset = self.state.drag_offset();
        let direction = self.state.direction();

        let (base, inertia) = if self.config.free_scroll {
            match self.inertia() {
                Some(inertia) => (self.state.last_resting_offset - inertia, Some(inertia)),
                None => (self.state.last_resting_offset, None),
            }
        } else {
            (0.0, None)
        };

        let offset = self.align(base, direction);
        let corrected = offset != base;

        self.host
            .apply_offset(offset, Transition::settle(&self.config));
        self.state.last_resting_offset = offset;
        self.state.position_correction = corrected;

        debug!(
            "Gesture settle release={:.1} inertia={:?} offset={:.1} corrected={}",
            release_offset, inertia, offset, corrected
        );

        Settlement {
            release_offset,
            direction,
            inertia,
            offset,
            corrected,
        }
    }

    /// Velocity-derived travel, `None` when no time has passed
    fn inertia(&self) -> Option<f64> {
        let elapsed = self
            .clock
            .now()
            .checked_sub(self.state.start_time)
            .unwrap_or_default();
        if elapsed.is_zero() {
            return None;
        }

        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        Some(self.state.travel() / elapsed_ms * 100.0)
    }

    /// Pull an offset that overshot in the drag direction back to the edge
    fn align(&self, offset: f64, direction: Option<Direction>) -> f64 {
        match direction {
            Some(Direction::Left) if offset < self.metrics.end_position => {
                self.metrics.end_position
            }
            Some(Direction::Right) if offset > 0.0 => 0.0,
            _ => offset,
        }
    }

    fn pull_input(&self) -> PullInput {
        PullInput {
            start_offset: self.state.start_offset,
            distance: self.state.travel().abs(),
            end_position: self.metrics.end_position,
            track_width: self.metrics.track_width,
            visible_width: self.metrics.visible_width,
            pull_limit: self.state.pull_limit,
        }
    }

    fn refresh_metrics(&mut self) {
        self.metrics = TrackMetrics::new(&self.config, self.items.count());
        self.apply_width();
    }

    fn apply_width(&mut self) {
        let width = self.metrics.track_width;
        self.host.set_track_width(width);
        debug!(
            "Track width {:.1} for {} cells (end position {:.1}, disabled={})",
            width, self.metrics.total_cell_count, self.metrics.end_position, self.metrics.disabled
        );
    }
}
