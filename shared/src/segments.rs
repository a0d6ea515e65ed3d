//! Angular layout of the wheel.
//!
//! This is the only place segment boundaries are derived. The canvas, the
//! label layout and the spin engine all consume the same `Vec<Segment>`.

use serde::{Serialize, Deserialize};

use crate::angle::{local_angle_under, TAU};
use crate::wheel_option::WheelOption;

/// One option's slice of the wheel, in wheel-local radians.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub option: WheelOption,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
}

impl Segment {
    pub fn size(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Half-open containment, `[start, end)`.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

pub fn total_weight(options: &[WheelOption]) -> f64 {
    options.iter().map(|opt| opt.weight).sum()
}

/// Splits one full turn, starting at `start_angle`, into contiguous segments
/// proportional to each option's weight, in list order.
///
/// Returns an empty list when the total weight is not positive.
pub fn compute_segments(options: &[WheelOption], start_angle: f64) -> Vec<Segment> {
    let total = total_weight(options);
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(options.len());
    let mut current = start_angle;
    for (index, option) in options.iter().enumerate() {
        let size = option.weight / total * TAU;
        let end = if index + 1 == options.len() {
            // close the circle exactly
            start_angle + TAU
        } else {
            current + size
        };
        segments.push(Segment {
            index,
            option: option.clone(),
            start_angle: current,
            end_angle: end,
            mid_angle: current + (end - current) / 2.0,
        });
        current = end;
    }
    segments
}

/// Finds the segment sitting under the pointer when the wheel is rotated by
/// `orientation`.
pub fn segment_under_pointer(
    segments: &[Segment],
    orientation: f64,
    pointer_angle: f64,
) -> Option<&Segment> {
    let first = segments.first()?;
    let local = local_angle_under(pointer_angle, orientation, first.start_angle);
    segments
        .iter()
        .find(|seg| seg.contains(local))
        .or_else(|| segments.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{PI, TWELVE_O_CLOCK};

    const EPS: f64 = 1e-9;

    fn options(weights: &[f64]) -> Vec<WheelOption> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WheelOption {
                label: format!("opt {}", i),
                weight: w,
                color: "#118AB2".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_partition_covers_full_turn() {
        let weights = [3.0, 0.25, 7.5, 1.0, 1.0, 12.0, 0.1];
        let segments = compute_segments(&options(&weights), TWELVE_O_CLOCK);
        assert_eq!(segments.len(), weights.len());

        let sum: f64 = segments.iter().map(Segment::size).sum();
        assert!((sum - TAU).abs() < EPS);
        assert_eq!(segments[0].start_angle, TWELVE_O_CLOCK);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.index, i);
            assert_eq!(seg.option.label, format!("opt {}", i));
            assert!(seg.start_angle < seg.mid_angle && seg.mid_angle < seg.end_angle);
        }
    }

    #[test]
    fn test_sizes_are_proportional() {
        let weights = [2.0, 1.0, 1.5];
        let segments = compute_segments(&options(&weights), 0.0);
        let total: f64 = weights.iter().sum();
        for (seg, w) in segments.iter().zip(weights) {
            assert!((seg.size() / TAU - w / total).abs() < EPS);
        }
    }

    #[test]
    fn test_non_positive_total_is_empty() {
        assert!(compute_segments(&[], 0.0).is_empty());
        assert!(compute_segments(&options(&[0.0, 0.0]), 0.0).is_empty());
        assert!(compute_segments(&options(&[-1.0, 0.5]), 0.0).is_empty());
    }

    #[test]
    fn test_equal_halves_from_twelve() {
        let segments = compute_segments(&options(&[1.0, 1.0]), TWELVE_O_CLOCK);
        assert!((segments[0].end_angle - PI / 2.0).abs() < EPS);
        assert!((segments[0].mid_angle - 0.0).abs() < EPS);
        assert!((segments[1].mid_angle - PI).abs() < EPS);
    }

    #[test]
    fn test_segment_under_pointer() {
        let segments = compute_segments(&options(&[1.0, 1.0]), TWELVE_O_CLOCK);
        // unrotated, the pointer sits on the start of segment 0
        let at_rest = segment_under_pointer(&segments, 0.0, TWELVE_O_CLOCK).unwrap();
        assert_eq!(at_rest.index, 0);
        // a quarter turn clockwise puts segment 1 (the left half) under the pointer
        let quarter = segment_under_pointer(&segments, PI / 2.0, TWELVE_O_CLOCK).unwrap();
        assert_eq!(quarter.index, 1);
        // full turns do not matter
        let many = segment_under_pointer(&segments, 7.0 * TAU + PI / 2.0, TWELVE_O_CLOCK).unwrap();
        assert_eq!(many.index, 1);
        assert!(segment_under_pointer(&[], 0.0, TWELVE_O_CLOCK).is_none());
    }
}
