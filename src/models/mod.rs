mod food;
mod plan;
mod profile;

pub use food::{DietClass, DietPreference, FoodItem, MealType, NutrientTarget, Nutrients};
pub use plan::{MealSlot, OrganizedPlan, PlanReport};
pub use profile::{Sex, UserProfile};
