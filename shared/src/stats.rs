use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::segments::{compute_segments, total_weight};
use crate::selection::pick_winner;
use crate::wheel_option::WheelOption;

/// Expected versus observed selection rate for one option.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DistributionRow {
    pub label: String,
    pub expected: f64,
    pub observed: f64,
    pub count: usize,
}

/// Runs the weighted selector `trials` times and tallies the winners.
pub fn simulate_distribution<R: Rng + ?Sized>(
    options: &[WheelOption],
    trials: usize,
    rng: &mut R,
) -> Vec<DistributionRow> {
    let total = total_weight(options);
    let segments = compute_segments(options, 0.0);
    let mut counts = vec![0usize; options.len()];

    if !segments.is_empty() {
        for _ in 0..trials {
            if let Some(i) = pick_winner(&segments, rng) {
                counts[i] += 1;
            }
        }
    }

    options
        .iter()
        .zip(counts)
        .map(|(opt, count)| DistributionRow {
            label: opt.display_label().to_string(),
            expected: if total > 0.0 { opt.weight / total } else { 0.0 },
            observed: if trials > 0 { count as f64 / trials as f64 } else { 0.0 },
            count,
        })
        .collect()
}

pub fn format_report(rows: &[DistributionRow], trials: usize) -> String {
    let mut out = format!("=== {} trials ===\n", trials);
    for row in rows {
        out.push_str(&format!(
            "{}: expected {:.2}% | observed {:.2}% ({} hits)\n",
            row.label,
            row.expected * 100.0,
            row.observed * 100.0,
            row.count
        ));
    }
    out
}
