use crate::catalog::Catalog;
use crate::error::{PlanError, Result};
use crate::models::{MealSlot, MealType, OrganizedPlan};

/// Partition a flat food list into Breakfast, Lunch, Dinner and Snacks.
///
/// Breakfast and snack foods go to their own buckets in input order. Mains
/// alternate between Lunch (even positions among mains) and Dinner (odd).
/// An empty list yields an empty plan.
pub fn organize_meal_plan<S: AsRef<str>>(items: &[S], catalog: &Catalog) -> Result<OrganizedPlan> {
    if items.is_empty() {
        return Ok(OrganizedPlan::default());
    }

    let mut plan = OrganizedPlan::with_all_slots();
    let mut mains_seen = 0usize;

    for name in items {
        let name = name.as_ref();
        let food = catalog
            .get(name)
            .ok_or_else(|| PlanError::FoodNotFound(name.to_string()))?;

        let slot = match food.meal_type {
            MealType::Breakfast => MealSlot::Breakfast,
            MealType::Snack => MealSlot::Snacks,
            MealType::Main => {
                let slot = if mains_seen % 2 == 0 {
                    MealSlot::Lunch
                } else {
                    MealSlot::Dinner
                };
                mains_seen += 1;
                slot
            }
        };
        plan.push(slot, food.name.clone());
    }

    Ok(plan)
}
