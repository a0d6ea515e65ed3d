//! Weighted winner selection by inverse-CDF sampling.

use rand::Rng;

use crate::segments::Segment;

/// Returns the index of the first weight whose running total is `>= u`.
///
/// `u` is expected in `[0, total)`. Falls back to the last index if floating
/// error leaves the walk without a match. `None` only for an empty slice.
pub fn select_index(weights: &[f64], u: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        if u <= cumulative {
            return Some(i);
        }
    }
    let fallback = weights.iter().rposition(|&w| w > 0.0).or_else(|| weights.len().checked_sub(1));
    if fallback.is_some() {
        log::warn!("weighted walk found no match for u={} (total {}), using fallback", u, cumulative);
    }
    fallback
}

/// Draws `u` uniformly from `[0, total)` and selects a segment.
pub fn pick_winner<R: Rng + ?Sized>(segments: &[Segment], rng: &mut R) -> Option<usize> {
    let weights: Vec<f64> = segments.iter().map(|seg| seg.option.weight).collect();
    let total: f64 = weights.iter().filter(|&&w| w > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    let u = rng.gen_range(0.0..total);
    select_index(&weights, u)
}
