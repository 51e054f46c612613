use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::evaluation::{RunResult, SweepSummary};

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write one CSV row per run.
pub fn write_csv(results: &[RunResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "target_calories",
        "target_protein",
        "seed",
        "found",
        "termination",
        "items",
        "plan_calories",
        "plan_protein",
        "expanded",
        "pushed",
        "elapsed_ms",
        "plan",
    ])?;

    for result in results {
        wtr.write_record([
            format!("{:.0}", result.target.calories),
            format!("{:.0}", result.target.protein),
            result.seed.to_string(),
            result.found.to_string(),
            format!("{:?}", result.termination),
            result.items.len().to_string(),
            format!("{:.1}", result.totals.calories),
            format!("{:.1}", result.totals.protein),
            result.expanded.to_string(),
            result.pushed.to_string(),
            format!("{:.3}", result.elapsed_ms),
            result.items.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the sweep summary as JSON.
pub fn write_summary_json(summary: &SweepSummary, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "runs": summary.runs,
        "found": summary.found,
        "expansion_limited": summary.limited,
        "success_rate": truncate(summary.success_rate(), 3),
        "avg_items": truncate(summary.avg_items, 2),
        "avg_expanded": truncate(summary.avg_expanded, 1),
        "max_expanded": summary.max_expanded,
        "avg_elapsed_ms": truncate(summary.avg_elapsed_ms, 3),
        "avg_distinct_plans": truncate(summary.avg_distinct_plans, 2),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the summary to stdout.
pub fn print_summary(summary: &SweepSummary) {
    println!("\n=== Sweep Summary ===\n");
    println!(
        "Runs: {}  found: {}  ({:.1}%)",
        summary.runs,
        summary.found,
        summary.success_rate() * 100.0
    );
    println!("Stopped by expansion limit: {}", summary.limited);
    println!("Average items per plan: {:.2}", summary.avg_items);
    println!(
        "Expansions: avg {:.1}, max {}",
        summary.avg_expanded, summary.max_expanded
    );
    println!("Average time per run: {:.3} ms", summary.avg_elapsed_ms);
    println!(
        "Distinct plans per target: {:.2}",
        summary.avg_distinct_plans
    );
    println!();
}

/// Print the targets no seed could satisfy.
pub fn print_failures(results: &[RunResult]) {
    let mut failed: Vec<(f64, f64)> = Vec::new();
    for result in results {
        let key = (result.target.calories, result.target.protein);
        let any_found = results
            .iter()
            .any(|r| r.found && (r.target.calories, r.target.protein) == key);
        if !any_found && !failed.contains(&key) {
            failed.push(key);
        }
    }

    if failed.is_empty() {
        return;
    }

    println!("Targets without any plan:");
    for (calories, protein) in failed {
        println!("  {:>6.0} kcal / {:>5.0} g protein", calories, protein);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrients;
    use crate::planner::Termination;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv_one_row_per_run() {
        let results = vec![RunResult {
            target: Nutrients::new(600.0, 50.0, 60.0, 20.0),
            seed: 3,
            found: true,
            items: vec!["Grilled Tofu Salad".to_string(), "Greek Yogurt".to_string()],
            totals: Nutrients::new(350.0, 30.0, 14.0, 12.0),
            termination: Termination::GoalReached,
            expanded: 5,
            pushed: 40,
            elapsed_ms: 0.2,
        }];

        let file = NamedTempFile::new().unwrap();
        write_csv(&results, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "true");
        assert_eq!(&rows[0][11], "Grilled Tofu Salad; Greek Yogurt");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(0.12345, 3), 0.123);
        assert_eq!(truncate(2.0 / 3.0, 2), 0.67);
    }
}
