use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::Sex;

/// Macro meal planner — searches a food catalog for a day's meals that hit
/// your remaining calorie and protein targets.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON food catalog (defaults to the built-in catalog).
    #[arg(short, long, env = "MEAL_PLANNER_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan for what is left of today's goals.
    Plan(PlanArgs),

    /// Compute daily calorie and macro goals from a profile.
    Goals(GoalsArgs),

    /// List the foods in the catalog.
    Foods {
        /// Only show vegetarian foods.
        #[arg(long)]
        vegetarian: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Daily calorie goal (prompted when omitted).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein goal in grams (prompted when omitted).
    #[arg(long)]
    pub protein: Option<f64>,

    /// Daily carbs goal in grams (prompted when omitted).
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Daily fat goal in grams (prompted when omitted).
    #[arg(long)]
    pub fat: Option<f64>,

    /// Food already eaten today; repeat for several.
    #[arg(long = "eaten", value_name = "FOOD")]
    pub eaten: Vec<String>,

    /// Exclude non-vegetarian foods.
    #[arg(long)]
    pub vegetarian: bool,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Expand foods in catalog order instead of shuffling.
    #[arg(long)]
    pub no_shuffle: bool,

    /// Give up after this many search expansions.
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,

    /// Ask for eaten foods and offer to re-roll the plan.
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args, Debug)]
pub struct GoalsArgs {
    /// Height in centimeters.
    #[arg(long, default_value = "170")]
    pub height: f64,

    /// Weight in kilograms.
    #[arg(long, default_value = "70")]
    pub weight: f64,

    /// Age in years.
    #[arg(long, default_value = "25")]
    pub age: u32,

    #[arg(long, value_enum, default_value = "male")]
    pub sex: Sex,

    /// Activity multiplier (1.2 sedentary .. 1.9 very active).
    #[arg(long, default_value = "1.2")]
    pub activity: f64,

    /// Print the goals as JSON.
    #[arg(long)]
    pub json: bool,
}
