use roulette_shared::stats::{format_report, simulate_distribution, DistributionRow};
use roulette_shared::WheelOption;
use wasm_bindgen::prelude::*;

use crate::hooks::load_options;

pub const ACCURACY_TRIALS: usize = 10_000;
const CONSOLE_DEFAULT_TRIALS: u32 = 100;

/// Spins the weighted selector `trials` times without animating and logs
/// expected against observed rates.
pub fn run_accuracy_check(options: &[WheelOption], trials: usize) -> Vec<DistributionRow> {
    let rows = simulate_distribution(options, trials, &mut rand::thread_rng());
    log::info!("{}", format_report(&rows, trials));
    rows
}

/// Console entry point: `testRouletteAccuracy(1000)` checks the saved options.
#[wasm_bindgen(js_name = testRouletteAccuracy)]
pub fn test_roulette_accuracy(trials: Option<u32>) -> String {
    let trials = trials.unwrap_or(CONSOLE_DEFAULT_TRIALS) as usize;
    let rows = run_accuracy_check(&load_options(), trials);
    format_report(&rows, trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_shared::wheel_option::initial_options;

    #[test]
    fn test_accuracy_check_counts_every_draw() {
        let rows = run_accuracy_check(&initial_options(), 2_000);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), 2_000);
        assert!(rows.iter().all(|r| r.expected == 0.5));
    }
}
