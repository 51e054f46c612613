use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// Which part of the day a food is eaten in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Main,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealType::Breakfast => "breakfast",
            MealType::Main => "main",
            MealType::Snack => "snack",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietClass {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl fmt::Display for DietClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietClass::Veg => f.write_str("veg"),
            DietClass::NonVeg => f.write_str("non-veg"),
        }
    }
}

/// Dietary restriction applied to the catalog before planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    Vegetarian,
    #[default]
    Unrestricted,
}

impl DietPreference {
    pub fn from_vegetarian_flag(vegetarian: bool) -> Self {
        if vegetarian {
            DietPreference::Vegetarian
        } else {
            DietPreference::Unrestricted
        }
    }

    /// Whether a food of the given class may be eaten under this preference.
    #[inline]
    pub fn allows(&self, diet: DietClass) -> bool {
        !(*self == DietPreference::Vegetarian && diet == DietClass::NonVeg)
    }
}

/// Calories and the three macronutrients.
///
/// Used for catalog values, running aggregates, daily goals and remaining
/// targets alike. Remaining targets may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Remaining daily budget the planner tries to approximate.
pub type NutrientTarget = Nutrients;

impl Nutrients {
    pub const ZERO: Nutrients = Nutrients {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Nutrients) {
        *self = *self + rhs;
    }
}

impl Sub for Nutrients {
    type Output = Nutrients;

    fn sub(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories - rhs.calories,
            protein: self.protein - rhs.protein,
            carbs: self.carbs - rhs.carbs,
            fat: self.fat - rhs.fat,
        }
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Nutrients>>(iter: I) -> Self {
        iter.fold(Nutrients::ZERO, Add::add)
    }
}

/// A catalog food with its nutrition per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(rename = "type")]
    pub meal_type: MealType,

    pub diet: DietClass,
}

impl FoodItem {
    pub fn new(
        name: &str,
        nutrients: Nutrients,
        meal_type: MealType,
        diet: DietClass,
    ) -> Self {
        Self {
            name: name.to_string(),
            calories: nutrients.calories,
            protein: nutrients.protein,
            carbs: nutrients.carbs,
            fat: nutrients.fat,
            meal_type,
            diet,
        }
    }

    #[inline]
    pub fn nutrients(&self) -> Nutrients {
        Nutrients::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Non-negative, finite nutrition values and a non-empty name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.calories, self.protein, self.carbs, self.fat]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} C:{} F:{}, {} ({})",
            self.name, self.calories, self.protein, self.carbs, self.fat, self.meal_type, self.diet
        )
    }
}
