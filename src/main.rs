use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use macro_meal_planner::catalog::{Catalog, load_catalog};
use macro_meal_planner::cli::{Cli, Command, GoalsArgs, PlanArgs};
use macro_meal_planner::error::{PlanError, Result};
use macro_meal_planner::interface::{
    display_food_list, display_goals, display_plan_report, prompt_eaten_foods, prompt_goals,
    prompt_yes_no,
};
use macro_meal_planner::models::{DietPreference, UserProfile};
use macro_meal_planner::planner::{SearchConfig, consumed_totals, generate_plan, remaining_target};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let owned;
    let catalog: &Catalog = match &cli.catalog {
        Some(path) => {
            owned = load_catalog(path)?;
            &owned
        }
        None => Catalog::builtin(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(catalog, &args),
        Command::Goals(args) => cmd_goals(&args),
        Command::Foods { vegetarian } => {
            let preference = DietPreference::from_vegetarian_flag(vegetarian);
            display_food_list(&catalog.filter(preference), "Foods");
            Ok(())
        }
    }
}

/// Generate a meal plan for the remaining budget.
fn cmd_plan(catalog: &Catalog, args: &PlanArgs) -> Result<()> {
    let goals = prompt_goals(args.calories, args.protein, args.carbs, args.fat)?;

    let mut eaten = Vec::with_capacity(args.eaten.len());
    for name in &args.eaten {
        eaten.push(catalog.resolve(name)?.name.clone());
    }
    if args.interactive {
        eaten.extend(prompt_eaten_foods(catalog)?);
    }

    let consumed = consumed_totals(catalog, &eaten)?;
    let target = remaining_target(&goals, &consumed);
    let preference = DietPreference::from_vegetarian_flag(args.vegetarian);

    let config = SearchConfig {
        shuffle: !args.no_shuffle,
        expansion_limit: args.max_expansions,
        ..SearchConfig::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !args.json {
        println!(
            "Planning for {:.0} kcal, {:.0} g protein remaining...",
            target.calories, target.protein
        );
    }

    loop {
        let report = match generate_plan(catalog, target, preference, config.clone(), &mut rng) {
            Ok(report) => report,
            Err(e) if e.is_advisory() => {
                print_advice(&e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        display_plan_report(&report, catalog);

        if !args.interactive || !prompt_yes_no("Generate a different plan?", false)? {
            return Ok(());
        }
    }
}

fn print_advice(e: &PlanError) {
    match e {
        PlanError::NoSolutionFound => {
            println!("{}. Try logging a protein source manually first!", e)
        }
        _ => println!("{}!", e),
    }
}

/// Compute daily goals from a profile.
fn cmd_goals(args: &GoalsArgs) -> Result<()> {
    let profile = UserProfile {
        height_cm: args.height,
        weight_kg: args.weight,
        age: args.age,
        sex: args.sex,
        activity: args.activity,
        ..UserProfile::default()
    };

    if !profile.is_valid() {
        return Err(PlanError::InvalidInput(
            "height, weight and activity must be positive".to_string(),
        ));
    }

    let goals = profile.daily_goals();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&goals)?);
    } else {
        display_goals(&goals);
    }
    Ok(())
}
