use std::time::Instant;

use crate::catalog::Catalog;
use crate::models::{DietPreference, NutrientTarget, Nutrients};
use crate::planner::{MealSearch, SearchConfig, Termination};

/// Result of one seeded search run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub target: NutrientTarget,
    pub seed: u64,
    pub found: bool,
    pub items: Vec<String>,
    pub totals: Nutrients,
    pub termination: Termination,
    pub expanded: usize,
    pub pushed: usize,
    pub elapsed_ms: f64,
}

/// Aggregate over all runs of a sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    pub runs: usize,
    pub found: usize,
    pub limited: usize,
    pub avg_items: f64,
    pub avg_expanded: f64,
    pub max_expanded: usize,
    pub avg_elapsed_ms: f64,
    /// Distinct plans per target, averaged; a measure of run-to-run variety.
    pub avg_distinct_plans: f64,
}

impl SweepSummary {
    pub fn success_rate(&self) -> f64 {
        if self.runs > 0 {
            self.found as f64 / self.runs as f64
        } else {
            0.0
        }
    }
}

/// Run the search once for a target with a fixed seed.
pub fn evaluate_target(
    catalog: &Catalog,
    target: NutrientTarget,
    preference: DietPreference,
    config: &SearchConfig,
    seed: u64,
) -> RunResult {
    let search = MealSearch::new(catalog, target, preference, config.clone());

    let start = Instant::now();
    let outcome = search.run_seeded(seed);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let items = outcome.solution.clone().unwrap_or_default();

    RunResult {
        target,
        seed,
        found: outcome.is_found(),
        items,
        totals: outcome.totals,
        termination: outcome.termination,
        expanded: outcome.stats.expanded,
        pushed: outcome.stats.pushed,
        elapsed_ms,
    }
}

/// Summarize a set of runs.
pub fn summarize(results: &[RunResult]) -> SweepSummary {
    if results.is_empty() {
        return SweepSummary::default();
    }

    let runs = results.len();
    let found: Vec<&RunResult> = results.iter().filter(|r| r.found).collect();
    let n = runs as f64;

    let avg_items = if found.is_empty() {
        0.0
    } else {
        found.iter().map(|r| r.items.len() as f64).sum::<f64>() / found.len() as f64
    };

    SweepSummary {
        runs,
        found: found.len(),
        limited: results
            .iter()
            .filter(|r| r.termination == Termination::ExpansionLimit)
            .count(),
        avg_items,
        avg_expanded: results.iter().map(|r| r.expanded as f64).sum::<f64>() / n,
        max_expanded: results.iter().map(|r| r.expanded).max().unwrap_or(0),
        avg_elapsed_ms: results.iter().map(|r| r.elapsed_ms).sum::<f64>() / n,
        avg_distinct_plans: average_distinct_plans(results),
    }
}

fn average_distinct_plans(results: &[RunResult]) -> f64 {
    let mut per_target: Vec<(NutrientTarget, Vec<Vec<String>>)> = Vec::new();

    for result in results.iter().filter(|r| r.found) {
        let mut plan = result.items.clone();
        plan.sort();

        match per_target.iter_mut().find(|(t, _)| *t == result.target) {
            Some((_, plans)) => {
                if !plans.contains(&plan) {
                    plans.push(plan);
                }
            }
            None => per_target.push((result.target, vec![plan])),
        }
    }

    if per_target.is_empty() {
        return 0.0;
    }
    per_target.iter().map(|(_, p)| p.len() as f64).sum::<f64>() / per_target.len() as f64
}
