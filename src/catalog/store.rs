use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::warn;

use crate::error::{PlanError, Result};
use crate::models::{DietPreference, FoodItem, Nutrients};

/// Minimum Jaro-Winkler similarity for a typed name to resolve to a food.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Read-only food lookup table, keyed by exact name.
///
/// Iteration follows definition order so filtered working sets are stable.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a list of foods.
    ///
    /// Duplicate names keep the last definition at the first one's position.
    pub fn new(items: Vec<FoodItem>) -> Result<Self> {
        let mut catalog = Catalog::default();
        for item in items {
            if !item.is_valid() {
                return Err(PlanError::InvalidInput(format!(
                    "invalid catalog entry: {}",
                    item.debug_string()
                )));
            }
            match catalog.index.get(&item.name) {
                Some(&pos) => {
                    warn!(name = %item.name, "duplicate catalog entry, keeping last definition");
                    catalog.items[pos] = item;
                }
                None => {
                    catalog.index.insert(item.name.clone(), catalog.items.len());
                    catalog.items.push(item);
                }
            }
        }
        Ok(catalog)
    }

    /// Exact lookup by name.
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    /// Exact lookup ignoring case.
    pub fn get_ignore_case(&self, name: &str) -> Option<&FoodItem> {
        self.get(name).or_else(|| {
            let lowered = name.to_lowercase();
            self.items.iter().find(|f| f.name.to_lowercase() == lowered)
        })
    }

    /// Look up a typed name: exact, then case-insensitive, then fuzzy.
    pub fn resolve(&self, input: &str) -> Result<&FoodItem> {
        let input = input.trim();
        if let Some(food) = self.get(input) {
            return Ok(food);
        }

        if let Some(food) = self.get_ignore_case(input) {
            return Ok(food);
        }

        self.fuzzy_matches(input)
            .into_iter()
            .find(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
            .map(|(food, _)| food)
            .ok_or_else(|| PlanError::FoodNotFound(input.to_string()))
    }

    /// Foods with a similarity above 0.7 to `input`, best first.
    pub fn fuzzy_matches(&self, input: &str) -> Vec<(&FoodItem, f64)> {
        let lowered = input.to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .items
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &lowered)))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// Foods usable under a dietary preference, in catalog order.
    pub fn filter(&self, preference: DietPreference) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|f| preference.allows(f.diet))
            .collect()
    }

    /// Total nutrition of a list of food names.
    pub fn totals<S: AsRef<str>>(&self, names: &[S]) -> Result<Nutrients> {
        names
            .iter()
            .map(|name| {
                self.get(name.as_ref())
                    .map(FoodItem::nutrients)
                    .ok_or_else(|| PlanError::FoodNotFound(name.as_ref().to_string()))
            })
            .sum()
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
