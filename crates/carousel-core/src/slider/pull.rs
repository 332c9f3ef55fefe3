//! Rubber-band resistance past the ends of the track

use super::gesture::Direction;

/// Which boundary the track has been dragged past
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Offset is above `0`: the first cell has left the viewport's left edge
    Left,
    /// Offset is below the end position
    Right,
}

impl Edge {
    /// Whether dragging in `direction` pulls the track further past this edge
    #[inline]
    pub fn resists(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Edge::Left, Direction::Right) | (Edge::Right, Direction::Left)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulled {
    pub edge: Edge,
    /// Distance past the edge, always positive
    pub overflow: f64,
}

/// Inputs to the damping curve captured from the current gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullInput {
    /// Rendered offset when the gesture started
    pub start_offset: f64,
    /// Absolute pointer travel since the gesture started
    pub distance: f64,
    pub end_position: f64,
    pub track_width: f64,
    pub visible_width: f64,
    pub pull_limit: f64,
}

pub fn detect_pulled(offset: f64, end_position: f64) -> Option<Pulled> {
    if offset > 0.0 {
        Some(Pulled {
            edge: Edge::Left,
            overflow: offset.abs(),
        })
    } else if offset < end_position {
        Some(Pulled {
            edge: Edge::Right,
            overflow: (offset - end_position).abs(),
        })
    } else {
        None
    }
}

/// Resistance grows with how far past the edge the track already is
#[inline]
pub fn deceleration_ratio(overflow: f64) -> f64 {
    3.0 + overflow / 50.0
}

/// Damped offset for a pulled track, or `0.0` when nothing is pulled.
///
/// The result never travels more than `pull_limit` past the exceeded edge.
pub fn dampen(pulled: Option<Pulled>, input: &PullInput) -> f64 {
    let Some(pulled) = pulled else {
        return 0.0;
    };

    let ratio = deceleration_ratio(pulled.overflow);
    let mut distance = input.distance;

    match pulled.edge {
        Edge::Left => {
            // Only the travel beyond the edge is damped
            if input.start_offset < 0.0 {
                distance -= input.start_offset.abs();
            }

            let rubber = distance / ratio;
            let offset = if input.start_offset > 0.0 {
                input.start_offset + rubber
            } else {
                rubber
            };

            offset.min(input.pull_limit)
        }
        Edge::Right => {
            let end = input.end_position;
            let rubber = end + ((input.start_offset - distance - end) / ratio);
            let scrollable = input.track_width - input.visible_width;

            let offset = if input.start_offset < -scrollable {
                (scrollable + input.start_offset) + rubber
            } else {
                rubber
            };

            offset.max(end - input.pull_limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start_offset: f64, distance: f64) -> PullInput {
        PullInput {
            start_offset,
            distance,
            end_position: -1460.0,
            track_width: 2100.0,
            visible_width: 630.0,
            pull_limit: 100.0,
        }
    }

    #[test]
    fn test_detect_pulled_edges() {
        assert_eq!(detect_pulled(-10.0, -1460.0), None);
        assert_eq!(detect_pulled(0.0, -1460.0), None);
        assert_eq!(detect_pulled(-1460.0, -1460.0), None);

        let left = detect_pulled(30.0, -1460.0).unwrap();
        assert_eq!(left.edge, Edge::Left);
        assert_eq!(left.overflow, 30.0);

        let right = detect_pulled(-1500.0, -1460.0).unwrap();
        assert_eq!(right.edge, Edge::Right);
        assert_eq!(right.overflow, 40.0);
    }

    #[test]
    fn test_detect_pulled_is_idempotent() {
        for offset in [-2000.0, -1460.0, -700.0, 0.0, 12.5, 400.0] {
            assert_eq!(detect_pulled(offset, -1460.0), detect_pulled(offset, -1460.0));
        }
    }

    #[test]
    fn test_edge_resists_opposing_direction() {
        assert!(Edge::Left.resists(Direction::Right));
        assert!(Edge::Right.resists(Direction::Left));
        assert!(!Edge::Left.resists(Direction::Left));
        assert!(!Edge::Right.resists(Direction::Right));
    }

    #[test]
    fn test_dampen_without_pull_is_neutral() {
        assert_eq!(dampen(None, &input(0.0, 300.0)), 0.0);
    }

    #[test]
    fn test_left_edge_from_rest() {
        let pulled = detect_pulled(300.0, -1460.0);
        // ratio = 3 + 300/50 = 9
        let offset = dampen(pulled, &input(0.0, 300.0));
        assert!((offset - 300.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_edge_only_damps_travel_past_edge() {
        // Started at -50 and dragged 300 right: 250 past the edge
        let pulled = detect_pulled(250.0, -1460.0);
        let offset = dampen(pulled, &input(-50.0, 300.0));
        assert!((offset - 250.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_edge_capped_when_already_pulled() {
        let pulled = detect_pulled(1080.0, -1460.0);
        let offset = dampen(pulled, &input(80.0, 1000.0));
        assert_eq!(offset, 100.0);
    }

    #[test]
    fn test_right_edge_within_track() {
        let pulled = detect_pulled(-1560.0, -1460.0);
        // ratio = 5, rubber = -1460 + (-100 / 5)
        let offset = dampen(pulled, &input(-1460.0, 100.0));
        assert!((offset - -1480.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_edge_beyond_rendered_window_is_capped() {
        let mut windowed = input(-1460.0, 1000.0);
        windowed.track_width = 1470.0;
        let pulled = detect_pulled(-2460.0, -1460.0);
        assert_eq!(dampen(pulled, &windowed), -1560.0);
    }

    #[test]
    fn test_larger_overflow_damps_harder() {
        for edge_offset in [10.0, 60.0, 150.0, 400.0] {
            let smaller = detect_pulled(edge_offset, -1460.0);
            let larger = detect_pulled(edge_offset * 2.0, -1460.0);
            let a = dampen(smaller, &input(0.0, 200.0));
            let b = dampen(larger, &input(0.0, 200.0));
            assert!(b <= a, "overflow {} gave {} > {}", edge_offset, b, a);
        }

        let smaller = detect_pulled(-1480.0, -1460.0);
        let larger = detect_pulled(-1600.0, -1460.0);
        let a = dampen(smaller, &input(-1460.0, 60.0));
        let b = dampen(larger, &input(-1460.0, 60.0));
        assert!((b - -1460.0).abs() <= (a - -1460.0).abs());
    }

    #[test]
    fn test_pull_never_exceeds_limit() {
        for distance in [1.0, 50.0, 500.0, 5_000.0, 500_000.0] {
            for start in [-200.0, 0.0, 40.0, 99.0] {
                let target = start + distance;
                let offset = dampen(detect_pulled(target, -1460.0), &input(start, distance));
                assert!(offset <= 100.0, "left pull {} from {}", offset, start);
            }
            for start in [-1300.0, -1460.0, -1520.0] {
                let target = start - distance;
                let offset = dampen(detect_pulled(target, -1460.0), &input(start, distance));
                assert!(offset >= -1560.0, "right pull {} from {}", offset, start);
            }
        }
    }
}
