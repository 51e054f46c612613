use rand::Rng;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{PlanError, Result};
use crate::models::{DietPreference, NutrientTarget, PlanReport};
use crate::planner::constants::MIN_PLANNABLE_CALORIES;
use crate::planner::organize::organize_meal_plan;
use crate::planner::search::{MealSearch, SearchConfig};

/// Generate a meal plan for the remaining budget.
///
/// Fails with `CalorieGoalReached` when too few calories remain to plan for,
/// and with `NoSolutionFound` when the search finds no combination within
/// tolerance. Both are ordinary outcomes callers should report as advice.
pub fn generate_plan<R: Rng + ?Sized>(
    catalog: &Catalog,
    target: NutrientTarget,
    preference: DietPreference,
    config: SearchConfig,
    rng: &mut R,
) -> Result<PlanReport> {
    if target.calories <= MIN_PLANNABLE_CALORIES {
        return Err(PlanError::CalorieGoalReached {
            remaining: target.calories,
        });
    }

    let search = MealSearch::new(catalog, target, preference, config);
    let outcome = search.run(rng);

    let items = outcome.solution.ok_or(PlanError::NoSolutionFound)?;
    let plan = organize_meal_plan(&items, catalog)?;
    let totals = catalog.totals(&items)?;

    info!(
        items = items.len(),
        calories = totals.calories,
        protein = totals.protein,
        expanded = outcome.stats.expanded,
        "generated meal plan"
    );

    Ok(PlanReport {
        items,
        plan,
        totals,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrients;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_calorie_goal_reached() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_plan(
            Catalog::builtin(),
            Nutrients::new(50.0, 40.0, 10.0, 5.0),
            DietPreference::Unrestricted,
            SearchConfig::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(PlanError::CalorieGoalReached { .. })));
    }

    #[test]
    fn test_empty_catalog_has_no_solution() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_plan(
            &Catalog::default(),
            Nutrients::new(1200.0, 90.0, 150.0, 40.0),
            DietPreference::Unrestricted,
            SearchConfig::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(PlanError::NoSolutionFound)));
    }
}
