pub mod evaluation;
pub mod grid;
pub mod output;

pub use evaluation::{RunResult, SweepSummary, evaluate_target, summarize};
pub use grid::{parse_range, target_for, target_grid};
pub use output::{print_failures, print_summary, write_csv, write_summary_json};

use tracing::info;

use crate::catalog::Catalog;
use crate::models::{DietPreference, NutrientTarget};
use crate::planner::SearchConfig;

/// Configuration for a sweep.
pub struct SweepConfig {
    pub targets: Vec<NutrientTarget>,
    /// Runs per target, seeded `base_seed`, `base_seed + 1`, ...
    pub seeds: u64,
    pub base_seed: u64,
    pub preference: DietPreference,
    pub search: SearchConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            targets: target_grid(&[800.0, 1200.0, 1600.0, 2000.0], &[60.0, 90.0, 120.0]),
            seeds: 5,
            base_seed: 123,
            preference: DietPreference::Unrestricted,
            search: SearchConfig {
                expansion_limit: Some(20_000),
                ..SearchConfig::default()
            },
        }
    }
}

/// Results from a sweep.
pub struct SweepResults {
    pub results: Vec<RunResult>,
    pub summary: SweepSummary,
}

/// Run the search for every target and seed.
pub fn run_sweep(config: &SweepConfig, catalog: &Catalog) -> SweepResults {
    let total = config.targets.len() * config.seeds as usize;
    let mut results = Vec::with_capacity(total);

    println!(
        "Running {} searches ({} targets x {} seeds)...",
        total,
        config.targets.len(),
        config.seeds
    );

    for target in &config.targets {
        for offset in 0..config.seeds {
            let seed = config.base_seed.wrapping_add(offset);
            let result =
                evaluate_target(catalog, *target, config.preference, &config.search, seed);
            info!(
                calories = target.calories,
                protein = target.protein,
                seed,
                found = result.found,
                expanded = result.expanded,
                "sweep run"
            );
            results.push(result);

            // Progress indicator every 10%
            if results.len() % (total / 10).max(1) == 0 {
                let pct = (results.len() as f64 / total as f64) * 100.0;
                eprint!("\r{:.0}% complete", pct);
            }
        }
    }
    eprintln!();

    let summary = summarize(&results);
    SweepResults { results, summary }
}
