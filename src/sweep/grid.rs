use crate::error::{PlanError, Result};
use crate::models::{NutrientTarget, Nutrients};

/// Parse `start:end:step` (inclusive) or a comma-separated list of numbers.
pub fn parse_range(s: &str) -> Result<Vec<f64>> {
    let s = s.trim();
    let invalid = || PlanError::InvalidInput(format!("invalid range: {}", s));

    if s.contains(':') {
        let parts: Vec<f64> = s
            .split(':')
            .map(|p| p.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| invalid())?;

        let [start, end, step] = parts[..] else {
            return Err(invalid());
        };
        if step <= 0.0 || end < start {
            return Err(invalid());
        }

        let steps = ((end - start) / step + 1e-9).floor() as usize;
        return Ok((0..=steps).map(|i| start + step * i as f64).collect());
    }

    let values: Vec<f64> = s
        .split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| invalid())?;

    if values.is_empty() {
        return Err(invalid());
    }
    Ok(values)
}

/// Target with carbs and fat filled from a 40/30 energy split.
pub fn target_for(calories: f64, protein: f64) -> NutrientTarget {
    Nutrients {
        calories,
        protein,
        carbs: calories * 0.40 / 4.0,
        fat: calories * 0.30 / 9.0,
    }
}

/// Every (calories, protein) combination as a target.
pub fn target_grid(calories: &[f64], protein: &[f64]) -> Vec<NutrientTarget> {
    calories
        .iter()
        .flat_map(|&c| protein.iter().map(move |&p| target_for(c, p)))
        .collect()
}
