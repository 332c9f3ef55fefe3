//! Track sizing derived from configuration and item count

use crate::config::SliderConfig;

/// Geometry of the track for one configuration and item count.
///
/// Offsets are horizontal translations of the track relative to its
/// viewport: `0` shows the first cell flush left, `end_position` shows the
/// last cell flush right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub full_cell_width: f64,
    pub total_cell_count: usize,
    /// Cells materialized at once when only a window of the track is rendered
    pub rendered_cell_count: usize,
    /// Not enough content to scroll; gestures are ignored
    pub disabled: bool,
    pub track_width: f64,
    /// Most negative legal resting offset
    pub end_position: f64,
    pub visible_width: f64,
}

impl TrackMetrics {
    pub fn new(config: &SliderConfig, total_cell_count: usize) -> Self {
        let full_cell_width = config.cell_width + config.cell_margin;
        let rendered_cell_count = (config.visible_cell_count
            + config.overflow_cells_limit * 2)
            .min(total_cell_count);
        let rendered_width = rendered_cell_count as f64 * full_cell_width;
        let total_width = total_cell_count as f64 * full_cell_width;

        Self {
            full_cell_width,
            total_cell_count,
            rendered_cell_count,
            disabled: config.visible_cell_count > total_cell_count,
            track_width: rendered_width.min(total_width),
            end_position: -(total_width - config.visible_width - config.cell_margin),
            visible_width: config.visible_width,
        }
    }

    /// Whether `offset` is a legal resting position
    pub fn contains(&self, offset: f64) -> bool {
        offset <= 0.0 && offset >= self.end_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SliderConfig {
        SliderConfig {
            visible_width: 630.0,
            cell_width: 200.0,
            cell_margin: 10.0,
            visible_cell_count: 3,
            overflow_cells_limit: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_metrics_for_long_track() {
        let metrics = TrackMetrics::new(&config(), 10);

        assert_eq!(metrics.full_cell_width, 210.0);
        assert_eq!(metrics.total_cell_count, 10);
        assert_eq!(metrics.rendered_cell_count, 7);
        assert!(!metrics.disabled);
        assert_eq!(metrics.track_width, 7.0 * 210.0);
        // -(2100 - 630 - 10)
        assert_eq!(metrics.end_position, -1460.0);
    }

    #[test]
    fn test_rendered_count_capped_by_items() {
        let metrics = TrackMetrics::new(&config(), 4);

        assert_eq!(metrics.rendered_cell_count, 4);
        assert_eq!(metrics.track_width, 4.0 * 210.0);
        assert!(!metrics.disabled);
    }

    #[test]
    fn test_too_few_cells_disables() {
        let metrics = TrackMetrics::new(&config(), 2);
        assert!(metrics.disabled);

        let metrics = TrackMetrics::new(&config(), 3);
        assert!(!metrics.disabled);
    }

    #[test]
    fn test_contains() {
        let metrics = TrackMetrics::new(&config(), 10);
        assert!(metrics.contains(0.0));
        assert!(metrics.contains(-1460.0));
        assert!(metrics.contains(-700.0));
        assert!(!metrics.contains(0.5));
        assert!(!metrics.contains(-1460.5));
    }
}
