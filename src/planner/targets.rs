use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{NutrientTarget, Nutrients};

/// Nutrition already eaten today, from catalog food names.
pub fn consumed_totals<S: AsRef<str>>(catalog: &Catalog, eaten: &[S]) -> Result<Nutrients> {
    catalog.totals(eaten)
}

/// Budget left for the day: goal minus consumed, per nutrient.
///
/// Values go negative once a goal has been exceeded.
pub fn remaining_target(goals: &Nutrients, consumed: &Nutrients) -> NutrientTarget {
    *goals - *consumed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_goes_negative() {
        let goals = Nutrients::new(2000.0, 150.0, 250.0, 65.0);
        let consumed = Nutrients::new(2100.0, 90.0, 260.0, 40.0);
        let remaining = remaining_target(&goals, &consumed);
        assert_eq!(remaining, Nutrients::new(-100.0, 60.0, -10.0, 25.0));
    }

    #[test]
    fn test_consumed_totals_from_builtin() {
        let consumed =
            consumed_totals(Catalog::builtin(), &["Greek Yogurt", "Whey Protein Shake"]).unwrap();
        assert_eq!(consumed, Nutrients::new(220.0, 34.0, 7.0, 1.0));
    }
}
