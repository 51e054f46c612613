use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{DietPreference, Nutrients};

/// Share of daily energy from protein.
const PROTEIN_ENERGY_SHARE: f64 = 0.30;
/// Share of daily energy from carbohydrates.
const CARB_ENERGY_SHARE: f64 = 0.40;
/// Share of daily energy from fat.
const FAT_ENERGY_SHARE: f64 = 0.30;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

/// Body measurements and habits the daily goals are derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
    pub sex: Sex,
    /// Activity multiplier applied to BMR (1.2 sedentary .. 1.9 very active).
    pub activity: f64,
    pub preference: DietPreference,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            height_cm: 170.0,
            weight_kg: 70.0,
            age: 25,
            sex: Sex::Male,
            activity: 1.2,
            preference: DietPreference::Unrestricted,
        }
    }
}

impl UserProfile {
    /// Basal metabolic rate (Mifflin-St Jeor).
    pub fn bmr(&self) -> f64 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * self.age as f64;
        match self.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// Total daily energy expenditure, rounded half to even.
    pub fn tdee(&self) -> f64 {
        (self.bmr() * self.activity).round_ties_even()
    }

    /// Daily calorie and macro goals with a 30/40/30 protein/carb/fat split.
    pub fn daily_goals(&self) -> Nutrients {
        let tdee = self.tdee();
        Nutrients {
            calories: tdee,
            protein: (tdee * PROTEIN_ENERGY_SHARE / KCAL_PER_GRAM_PROTEIN).round_ties_even(),
            carbs: (tdee * CARB_ENERGY_SHARE / KCAL_PER_GRAM_CARBS).round_ties_even(),
            fat: (tdee * FAT_ENERGY_SHARE / KCAL_PER_GRAM_FAT).round_ties_even(),
        }
    }

    /// Rejects measurements no goal calculation can make sense of.
    pub fn is_valid(&self) -> bool {
        self.height_cm.is_finite()
            && self.height_cm > 0.0
            && self.weight_kg.is_finite()
            && self.weight_kg > 0.0
            && self.activity.is_finite()
            && self.activity > 0.0
    }
}
