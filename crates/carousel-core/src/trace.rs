//! Recorded gesture traces
//!
//! A trace is a list of timestamped pointer events plus the items (and
//! optionally the slider geometry) they were recorded against. Replaying one
//! drives a slider over an [`AnimatedTrack`] with a hand-stepped clock, so the
//! result is deterministic.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::ManualClock;
use crate::config::{AppConfig, SliderConfig};
use crate::geometry::TrackMetrics;
use crate::items::ItemCollection;
use crate::motion::AnimatedTrack;
use crate::slider::{GesturePhase, Settlement, Slider};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureTrace {
    /// Geometry the trace was recorded with; the app config is used if absent
    #[serde(default)]
    pub slider: Option<SliderConfig>,
    #[serde(default)]
    pub items: ItemCollection,
    /// Track offset before the first event
    #[serde(default)]
    pub start_offset: f64,
    #[serde(default, rename = "event")]
    pub events: Vec<TraceEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TraceEvent {
    Down {
        at_ms: u64,
        x: f64,
    },
    Move {
        at_ms: u64,
        x: f64,
    },
    Up {
        at_ms: u64,
        #[serde(default)]
        delegated: bool,
    },
}

impl TraceEvent {
    pub fn at_ms(&self) -> u64 {
        match *self {
            TraceEvent::Down { at_ms, .. }
            | TraceEvent::Move { at_ms, .. }
            | TraceEvent::Up { at_ms, .. } => at_ms,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TraceEvent::Down { .. } => "down",
            TraceEvent::Move { .. } => "move",
            TraceEvent::Up { delegated: true, .. } => "up (delegated)",
            TraceEvent::Up { .. } => "up",
        }
    }
}

/// Slider state right after one trace event
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStep {
    pub event: TraceEvent,
    pub phase: GesturePhase,
    /// Offset visible on the track at the event's timestamp
    pub offset: f64,
    /// Offset the track is heading to
    pub target: f64,
    pub resting_offset: f64,
    pub settlement: Option<Settlement>,
}

#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub metrics: TrackMetrics,
    pub steps: Vec<ReplayStep>,
    /// Where the track ends up once the last transition finishes
    pub final_offset: f64,
}

impl GestureTrace {
    /// Load a trace from a `.json` file, or TOML for any other extension
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let trace: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        trace.validate()?;
        Ok(trace)
    }

    /// Timestamps must never go backwards
    pub fn validate(&self) -> crate::Result<()> {
        for pair in self.events.windows(2) {
            if pair[1].at_ms() < pair[0].at_ms() {
                return Err(crate::Error::Trace(format!(
                    "event at {}ms follows event at {}ms",
                    pair[1].at_ms(),
                    pair[0].at_ms()
                )));
            }
        }
        if let Some(slider) = &self.slider {
            slider.validate()?;
        }
        Ok(())
    }
}

/// Replay `trace` against a fresh slider
pub fn replay(trace: &GestureTrace, config: &AppConfig) -> crate::Result<ReplayReport> {
    trace.validate()?;

    let clock = ManualClock::new();
    if let Some(first) = trace.events.first() {
        clock.set_millis(first.at_ms());
    }

    let slider_config = trace.slider.clone().unwrap_or_else(|| config.slider.clone());
    let track = AnimatedTrack::new(clock.clone()).with_offset(trace.start_offset);
    let mut slider = Slider::with_clock(slider_config, track, trace.items.clone(), clock.clone());
    slider.set_pull_limit(config.pull.limit);

    let mut steps = Vec::with_capacity(trace.events.len());
    for event in &trace.events {
        clock.set_millis(event.at_ms());

        let settlement = match *event {
            TraceEvent::Down { x, .. } => {
                slider.on_pointer_down(x);
                None
            }
            TraceEvent::Move { x, .. } => {
                slider.on_pointer_move(x);
                None
            }
            TraceEvent::Up { delegated, .. } => slider.on_pointer_up(delegated),
        };

        let offset = slider.host_mut().update();
        steps.push(ReplayStep {
            event: *event,
            phase: slider.state().phase(),
            offset,
            target: slider.host().target_offset(),
            resting_offset: slider.state().last_resting_offset(),
            settlement,
        });
    }

    debug!("Replayed {} trace events", steps.len());

    Ok(ReplayReport {
        metrics: *slider.metrics(),
        final_offset: slider.host().target_offset(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLICK: &str = r#"
        start_offset = 0.0

        [slider]
        visible_width = 630.0
        cell_width = 200.0
        cell_margin = 10.0
        visible_cell_count = 3
        overflow_cells_limit = 5
        transition_duration_ms = 300
        free_scroll = true

        [items]
        cell_count = 10

        [[event]]
        kind = "down"
        at_ms = 0
        x = 500.0

        [[event]]
        kind = "move"
        at_ms = 0
        x = 500.0

        [[event]]
        kind = "move"
        at_ms = 100
        x = 300.0

        [[event]]
        kind = "up"
        at_ms = 100
    "#;

    #[test]
    fn test_parse_toml_trace() {
        let trace: GestureTrace = toml::from_str(FLICK).unwrap();

        assert_eq!(trace.events.len(), 4);
        assert_eq!(trace.events[2], TraceEvent::Move { at_ms: 100, x: 300.0 });
        assert_eq!(
            trace.events[3],
            TraceEvent::Up {
                at_ms: 100,
                delegated: false
            }
        );
        assert!(trace.slider.unwrap().free_scroll);
    }

    #[test]
    fn test_parse_json_trace() {
        let trace: GestureTrace = serde_json::from_str(
            r#"{
                "items": { "images": ["a.jpg", "b.jpg", "c.jpg", "d.jpg"] },
                "event": [
                    { "kind": "move", "at_ms": 5, "x": 10.0 },
                    { "kind": "up", "at_ms": 9, "delegated": true }
                ]
            }"#,
        )
        .unwrap();

        assert!(trace.slider.is_none());
        assert_eq!(trace.items.images.len(), 4);
        assert_eq!(trace.events[1].label(), "up (delegated)");
    }

    #[test]
    fn test_out_of_order_events_rejected() {
        let trace = GestureTrace {
            events: vec![
                TraceEvent::Move { at_ms: 50, x: 0.0 },
                TraceEvent::Move { at_ms: 40, x: 1.0 },
            ],
            ..Default::default()
        };

        assert!(matches!(trace.validate(), Err(crate::Error::Trace(_))));
        assert!(replay(&trace, &AppConfig::default()).is_err());
    }

    #[test]
    fn test_replay_flick() {
        let trace: GestureTrace = toml::from_str(FLICK).unwrap();
        let report = replay(&trace, &AppConfig::default()).unwrap();

        assert_eq!(report.metrics.end_position, -1460.0);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[0].phase, GesturePhase::Armed);
        assert_eq!(report.steps[2].phase, GesturePhase::Dragging);
        assert_eq!(report.steps[2].offset, -200.0);

        let last = &report.steps[3];
        assert_eq!(last.phase, GesturePhase::Idle);
        let settlement = last.settlement.unwrap();
        assert!((settlement.offset - -400.0).abs() < 1e-9);
        // The settle transition has only just started
        assert_eq!(last.offset, -200.0);
        assert!((report.final_offset - -400.0).abs() < 1e-9);
    }

    #[test]
    fn test_replay_uses_app_config_without_override() {
        let trace = GestureTrace {
            items: ItemCollection::from_cells(2),
            events: vec![
                TraceEvent::Move { at_ms: 0, x: 100.0 },
                TraceEvent::Move { at_ms: 10, x: 0.0 },
            ],
            ..Default::default()
        };

        // Default config shows 3 cells, so two items cannot scroll
        let report = replay(&trace, &AppConfig::default()).unwrap();
        assert!(report.metrics.disabled);
        assert!(report.steps.iter().all(|s| s.offset == 0.0));
    }
}
