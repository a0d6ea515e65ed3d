//! Where and how segment labels are drawn.

use crate::angle::{normalize, PI};
use crate::segments::Segment;

/// Labels sit at this fraction of the wheel radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.65;
/// Segments narrower than this get no label.
pub const MIN_LABEL_ANGLE: f64 = PI / 8.0;
pub const ELLIPSIS: &str = "..";

/// A label ready to draw, in wheel-local coordinates relative to the center.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub segment_index: usize,
    pub text: String,
    pub font_px: u32,
    pub x: f64,
    pub y: f64,
    /// Rotation applied to the glyphs around `(x, y)`.
    pub rotation: f64,
}

/// Font size steps with the angular size of the segment.
pub fn font_size_for(size: f64) -> u32 {
    if size < PI / 6.0 {
        10
    } else if size < PI / 4.0 {
        12
    } else if size < PI / 3.0 {
        14
    } else {
        16
    }
}

/// Maximum number of characters shown for a segment of angular `size`.
pub fn max_chars_for(size: f64) -> usize {
    ((size * 6.0).floor() as usize).max(3)
}

pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// True when a glyph rotated by `angle` would read upside-down.
pub fn is_upside_down(angle: f64) -> bool {
    let a = normalize(angle);
    a > PI / 2.0 && a < 3.0 * PI / 2.0
}

pub fn layout_label(segment: &Segment, radius: f64) -> Option<LabelLayout> {
    let size = segment.size();
    let label = segment.option.label.trim();
    if size < MIN_LABEL_ANGLE || label.is_empty() {
        return None;
    }

    let mid = segment.mid_angle;
    let text_radius = radius * LABEL_RADIUS_RATIO;
    let rotation = if is_upside_down(mid) { mid + PI } else { mid };

    Some(LabelLayout {
        segment_index: segment.index,
        text: truncate_label(label, max_chars_for(size)),
        font_px: font_size_for(size),
        x: mid.cos() * text_radius,
        y: mid.sin() * text_radius,
        rotation,
    })
}

pub fn layout_labels(segments: &[Segment], radius: f64) -> Vec<LabelLayout> {
    segments
        .iter()
        .filter_map(|seg| layout_label(seg, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::TWELVE_O_CLOCK;
    use crate::segments::compute_segments;
    use crate::wheel_option::WheelOption;

    fn opt(label: &str, weight: f64) -> WheelOption {
        WheelOption { label: label.to_string(), weight, color: "#FCBF49".to_string() }
    }

    #[test]
    fn test_font_size_steps() {
        assert_eq!(font_size_for(PI / 7.0), 10);
        assert_eq!(font_size_for(PI / 5.0), 12);
        assert_eq!(font_size_for(PI / 3.5), 14);
        assert_eq!(font_size_for(PI), 16);
    }

    #[test]
    fn test_truncation_counts_chars() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("abcdefgh", 5), "abc..");
        assert_eq!(truncate_label("옵션옵션옵션", 4), "옵션..");
        assert_eq!(max_chars_for(0.1), 3);
        assert_eq!(max_chars_for(PI), 18);
    }

    #[test]
    fn test_small_and_blank_segments_have_no_label() {
        let segments = compute_segments(
            &[opt("big", 20.0), opt("tiny", 0.5), opt("  ", 5.0)],
            TWELVE_O_CLOCK,
        );
        let labels = layout_labels(&segments, 100.0);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].segment_index, 0);
    }

    #[test]
    fn test_lower_half_labels_are_flipped() {
        // two halves from 12 o'clock: right half mid = 0, left half mid = PI
        let segments = compute_segments(&[opt("right", 1.0), opt("left", 1.0)], TWELVE_O_CLOCK);
        let labels = layout_labels(&segments, 200.0);
        assert_eq!(labels.len(), 2);
        assert!((labels[0].rotation - 0.0).abs() < 1e-9);
        assert!((labels[1].rotation - 2.0 * PI).abs() < 1e-9);
        assert!((labels[0].x - 130.0).abs() < 1e-9);
        assert!((labels[1].x + 130.0).abs() < 1e-9);
        assert_eq!(labels[0].font_px, 16);
    }
}
