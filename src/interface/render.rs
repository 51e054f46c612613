use crate::catalog::Catalog;
use crate::models::{FoodItem, Nutrients, PlanReport};

/// Display an organized meal plan with its nutrition summary.
pub fn display_plan_report(report: &PlanReport, catalog: &Catalog) {
    if report.plan.is_empty() {
        println!("Your remaining budget is already on target; nothing to add.");
        return;
    }

    println!();
    println!("=== Meal Plan ===");

    // Find max food name length for alignment
    let max_name_len = report.items.iter().map(|n| n.len()).max().unwrap_or(10);

    for (slot, items) in report.plan.meals() {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("{}:", slot);
        for name in items {
            match catalog.get(name) {
                Some(food) => println!(
                    "  {:<width$} - {:>4.0} cal | P:{:>5.1} C:{:>5.1} F:{:>5.1}",
                    food.name,
                    food.calories,
                    food.protein,
                    food.carbs,
                    food.fat,
                    width = max_name_len
                ),
                None => println!("  {}", name),
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", report.items.len());
    display_comparison(&report.totals, &report.target);
    println!();
}

/// Side-by-side plan totals versus the remaining budget.
fn display_comparison(totals: &Nutrients, target: &Nutrients) {
    let rows = [
        ("Calories", totals.calories, target.calories, "kcal"),
        ("Protein", totals.protein, target.protein, "g"),
        ("Carbs", totals.carbs, target.carbs, "g"),
        ("Fat", totals.fat, target.fat, "g"),
    ];
    for (label, planned, wanted, unit) in rows {
        println!(
            "{:<9} {:>7.1} / {:>7.1} {:<4} ({:+.1})",
            label,
            planned,
            wanted,
            unit,
            planned - wanted
        );
    }
}

/// Display daily goals derived from a profile.
pub fn display_goals(goals: &Nutrients) {
    println!();
    println!("=== Daily Goals ===");
    println!("Calories: {:.0} kcal", goals.calories);
    println!("Protein:  {:.0} g", goals.protein);
    println!("Carbs:    {:.0} g", goals.carbs);
    println!("Fat:      {:.0} g", goals.fat);
    println!();
}

/// Display a list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<width$} {:>4.0} cal, P:{} C:{} F:{}  [{}, {}]",
            food.name,
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            food.meal_type,
            food.diet,
            width = max_name_len
        );
    }

    println!();
}
