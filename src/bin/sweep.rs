use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_meal_planner::catalog::{Catalog, load_catalog};
use macro_meal_planner::models::DietPreference;
use macro_meal_planner::planner::SearchConfig;
use macro_meal_planner::sweep::{
    SweepConfig, parse_range, print_failures, print_summary, run_sweep, target_grid, write_csv,
    write_summary_json,
};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Run the meal search over a grid of targets and report success and effort")]
struct Args {
    /// Calorie targets: `start:end:step` or a comma-separated list
    #[arg(long, default_value = "800:2000:400")]
    calories: String,

    /// Protein targets in grams: `start:end:step` or a comma-separated list
    #[arg(long, default_value = "60,90,120")]
    protein: String,

    /// Seeded runs per target
    #[arg(long, default_value = "5")]
    seeds: u64,

    /// First seed
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Exclude non-vegetarian foods
    #[arg(long)]
    vegetarian: bool,

    /// Expansion budget per run (0 for unlimited)
    #[arg(long, default_value = "20000")]
    max_expansions: usize,

    /// JSON food catalog (defaults to the built-in catalog)
    #[arg(long, env = "MEAL_PLANNER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output CSV file for all runs
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the summary
    #[arg(long, default_value = "sweep_summary.json")]
    json: PathBuf,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let owned;
    let catalog: &Catalog = match &args.catalog {
        Some(path) => match load_catalog(path) {
            Ok(c) => {
                owned = c;
                &owned
            }
            Err(e) => {
                eprintln!("Error loading catalog {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Catalog::builtin(),
    };

    let (calories, protein) = match (parse_range(&args.calories), parse_range(&args.protein)) {
        (Ok(c), Ok(p)) => (c, p),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Catalog: {} foods", catalog.len());
    println!("Calorie targets: {:?}", calories);
    println!("Protein targets: {:?}", protein);

    let config = SweepConfig {
        targets: target_grid(&calories, &protein),
        seeds: args.seeds.max(1),
        base_seed: args.seed,
        preference: DietPreference::from_vegetarian_flag(args.vegetarian),
        search: SearchConfig {
            expansion_limit: (args.max_expansions > 0).then_some(args.max_expansions),
            ..SearchConfig::default()
        },
    };

    let sweep = run_sweep(&config, catalog);

    print_summary(&sweep.summary);
    print_failures(&sweep.results);

    if let Err(e) = write_csv(&sweep.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all runs to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&sweep.summary, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
