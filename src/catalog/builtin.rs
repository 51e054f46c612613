use std::sync::LazyLock;

use tracing::error;

use crate::catalog::Catalog;
use crate::models::{DietClass, FoodItem, MealType, Nutrients};

use DietClass::{NonVeg, Veg};
use MealType::{Breakfast, Main, Snack};

/// (name, calories, protein, carbs, fat, type, diet)
type Row = (&'static str, f64, f64, f64, f64, MealType, DietClass);

const DEFAULT_FOODS: &[Row] = &[
    // Breakfast
    ("Masala Dosa (1 pc)", 350.0, 6.0, 45.0, 14.0, Breakfast, Veg),
    ("Idly (2 pcs) + Sambar", 200.0, 8.0, 35.0, 2.0, Breakfast, Veg),
    ("Poha with Peanuts", 270.0, 8.0, 40.0, 10.0, Breakfast, Veg),
    ("Paneer Paratha + Curd", 380.0, 14.0, 35.0, 18.0, Breakfast, Veg),
    ("Moong Dal Chilla (2 pcs)", 250.0, 14.0, 30.0, 6.0, Breakfast, Veg),
    ("Boiled Eggs (3)", 230.0, 18.0, 2.0, 15.0, Breakfast, NonVeg),
    ("Omelette (3 eggs)", 300.0, 20.0, 2.0, 22.0, Breakfast, NonVeg),
    // Vegetarian mains
    ("Soya Chunks Masala", 280.0, 25.0, 15.0, 10.0, Main, Veg),
    ("Paneer Bhurji + 2 Chapati", 420.0, 22.0, 35.0, 20.0, Main, Veg),
    ("Grilled Tofu Salad", 250.0, 20.0, 10.0, 12.0, Main, Veg),
    ("Rajma Chawal", 400.0, 14.0, 60.0, 10.0, Main, Veg),
    ("Dal Tadka + Rice", 350.0, 12.0, 55.0, 8.0, Main, Veg),
    ("Palak Paneer + Roti", 380.0, 18.0, 35.0, 20.0, Main, Veg),
    ("Chole Masala + Rice", 450.0, 14.0, 65.0, 14.0, Main, Veg),
    // Non-vegetarian mains
    ("Grilled Chicken Breast", 200.0, 40.0, 0.0, 4.0, Main, NonVeg),
    ("Chicken Curry + Rice", 450.0, 30.0, 50.0, 15.0, Main, NonVeg),
    ("Fish Curry + Rice", 400.0, 28.0, 50.0, 12.0, Main, NonVeg),
    ("Chicken Biryani", 500.0, 25.0, 60.0, 18.0, Main, NonVeg),
    // Snacks
    ("Whey Protein Shake", 120.0, 24.0, 3.0, 1.0, Snack, Veg),
    ("Greek Yogurt", 100.0, 10.0, 4.0, 0.0, Snack, Veg),
    ("Roasted Chana (50g)", 180.0, 10.0, 30.0, 3.0, Snack, Veg),
    ("Masala Chai", 100.0, 3.0, 15.0, 3.0, Snack, Veg),
    ("Apple", 95.0, 0.5, 25.0, 0.3, Snack, Veg),
    ("Banana", 105.0, 1.3, 27.0, 0.3, Snack, Veg),
];

/// The built-in catalog, constructed once per process.
pub static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(default_items()).unwrap_or_else(|e| {
        error!(error = %e, "built-in catalog rejected, starting empty");
        Catalog::default()
    })
});

fn default_items() -> Vec<FoodItem> {
    DEFAULT_FOODS
        .iter()
        .map(|&(name, cal, pro, carb, fat, meal_type, diet)| {
            FoodItem::new(name, Nutrients::new(cal, pro, carb, fat), meal_type, diet)
        })
        .collect()
}

impl Catalog {
    /// Shared reference to the built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &DEFAULT_CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietPreference;

    #[test]
    fn test_default_rows_are_valid() {
        let items = default_items();
        assert!(items.iter().all(FoodItem::is_valid));
        let catalog = Catalog::new(items).unwrap();
        assert_eq!(catalog.len(), DEFAULT_FOODS.len());
    }

    #[test]
    fn test_builtin_is_complete() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), DEFAULT_FOODS.len());
        assert_eq!(catalog.len(), 24);
    }

    #[test]
    fn test_builtin_vegetarian_subset() {
        let veg = Catalog::builtin().filter(DietPreference::Vegetarian);
        assert_eq!(veg.len(), 18);
        assert!(veg.iter().all(|f| f.diet == DietClass::Veg));
    }
}
