pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod sweep;

pub use catalog::Catalog;
pub use error::{PlanError, Result};
pub use models::{FoodItem, NutrientTarget, Nutrients, OrganizedPlan, PlanReport};
