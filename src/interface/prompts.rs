use dialoguer::{Confirm, Input, Select};

use crate::catalog::Catalog;
use crate::error::{PlanError, Result};
use crate::models::Nutrients;

/// Default daily goals offered at the prompts.
pub const DEFAULT_GOALS: Nutrients = Nutrients {
    calories: 2000.0,
    protein: 150.0,
    carbs: 250.0,
    fat: 65.0,
};

/// Prompt for a number, offering `default`.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Fill in any daily goal not given on the command line.
pub fn prompt_goals(
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
) -> Result<Nutrients> {
    let pick = |given: Option<f64>, prompt: &str, default: f64| match given {
        Some(v) => Ok(v),
        None => prompt_number(prompt, default),
    };

    Ok(Nutrients {
        calories: pick(calories, "Daily calorie goal (kcal)", DEFAULT_GOALS.calories)?,
        protein: pick(protein, "Daily protein goal (g)", DEFAULT_GOALS.protein)?,
        carbs: pick(carbs, "Daily carbs goal (g)", DEFAULT_GOALS.carbs)?,
        fat: pick(fat, "Daily fat goal (g)", DEFAULT_GOALS.fat)?,
    })
}

/// Prompt for foods already eaten today, with fuzzy matching.
pub fn prompt_eaten_foods(catalog: &Catalog) -> Result<Vec<String>> {
    let mut eaten = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food you ate today (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(food) = catalog.get_ignore_case(input) {
            eaten.push(food.name.clone());
            println!("Added: {}", food.name);
            continue;
        }

        let candidates = catalog.fuzzy_matches(input);

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                eaten.push(food.name.clone());
                println!("Added: {}", food.name);
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(f, _)| f.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                eaten.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(eaten)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
