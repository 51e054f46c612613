pub mod constants;
pub mod generate;
pub mod heuristic;
pub mod organize;
pub mod search;
pub mod targets;

pub use constants::*;
pub use generate::generate_plan;
pub use heuristic::{HeuristicWeights, heuristic};
pub use organize::organize_meal_plan;
pub use search::{
    MealSearch, SearchConfig, SearchOutcome, SearchStats, Termination, repetition_allows,
};
pub use targets::{consumed_totals, remaining_target};
