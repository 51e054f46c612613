use crate::models::{NutrientTarget, Nutrients};
use crate::planner::constants::{CALORIE_WEIGHT, CARB_WEIGHT, FAT_WEIGHT, PROTEIN_WEIGHT};

/// Per-nutrient weights of the distance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            calories: CALORIE_WEIGHT,
            protein: PROTEIN_WEIGHT,
            carbs: CARB_WEIGHT,
            fat: FAT_WEIGHT,
        }
    }
}

impl HeuristicWeights {
    /// Weighted absolute distance from `aggregate` to `target`.
    ///
    /// Not a lower bound on remaining cost; the search only uses it to order
    /// the frontier.
    #[inline]
    pub fn distance(&self, target: &NutrientTarget, aggregate: &Nutrients) -> f64 {
        self.calories * (target.calories - aggregate.calories).abs()
            + self.protein * (target.protein - aggregate.protein).abs()
            + self.carbs * (target.carbs - aggregate.carbs).abs()
            + self.fat * (target.fat - aggregate.fat).abs()
    }
}

/// Distance estimate with the default weights.
pub fn heuristic(target: &NutrientTarget, aggregate: &Nutrients) -> f64 {
    HeuristicWeights::default().distance(target, aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_zero_at_target() {
        let target = Nutrients::new(1500.0, 120.0, 180.0, 50.0);
        assert_float_absolute_eq!(heuristic(&target, &target), 0.0);
    }

    #[test]
    fn test_default_weighting() {
        let target = Nutrients::new(1000.0, 100.0, 100.0, 50.0);
        let aggregate = Nutrients::new(900.0, 90.0, 80.0, 45.0);
        // 100 + 20*10 + 2*20 + 4*5
        assert_float_absolute_eq!(heuristic(&target, &aggregate), 360.0);
    }

    #[test]
    fn test_overshoot_counts_like_shortfall() {
        let target = Nutrients::new(500.0, 30.0, 0.0, 0.0);
        let under = Nutrients::new(400.0, 20.0, 0.0, 0.0);
        let over = Nutrients::new(600.0, 40.0, 0.0, 0.0);
        assert_float_absolute_eq!(heuristic(&target, &under), heuristic(&target, &over));
    }

    #[test]
    fn test_custom_weights() {
        let weights = HeuristicWeights {
            calories: 0.0,
            protein: 1.0,
            carbs: 0.0,
            fat: 0.0,
        };
        let target = Nutrients::new(2000.0, 150.0, 250.0, 65.0);
        assert_float_absolute_eq!(weights.distance(&target, &Nutrients::ZERO), 150.0);
    }
}
