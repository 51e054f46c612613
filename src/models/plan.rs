use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::Nutrients;

/// Display bucket a planned food lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snacks,
    ];
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        };
        f.write_str(s)
    }
}

/// A flat food list partitioned into meals.
///
/// An empty plan has no buckets at all; a non-empty one always has all four,
/// in `MealSlot::ALL` order, some of which may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizedPlan {
    meals: Vec<(MealSlot, Vec<String>)>,
}

impl OrganizedPlan {
    pub(crate) fn with_all_slots() -> Self {
        Self {
            meals: MealSlot::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }

    pub(crate) fn push(&mut self, slot: MealSlot, name: String) {
        if let Some((_, items)) = self.meals.iter_mut().find(|(s, _)| *s == slot) {
            items.push(name);
        }
    }

    /// Items in a bucket, `None` when the plan has no such bucket.
    pub fn get(&self, slot: MealSlot) -> Option<&[String]> {
        self.meals
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, items)| items.as_slice())
    }

    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &[String])> {
        self.meals.iter().map(|(s, items)| (*s, items.as_slice()))
    }

    /// All items as one list: breakfast, then mains with lunch and dinner
    /// interleaved back into pick order, then snacks.
    ///
    /// Organizing the flattened list again yields the same plan.
    pub fn flatten(&self) -> Vec<String> {
        let bucket = |slot| self.get(slot).unwrap_or(&[]);
        let lunch = bucket(MealSlot::Lunch);
        let dinner = bucket(MealSlot::Dinner);

        let mut items: Vec<String> = bucket(MealSlot::Breakfast).to_vec();
        for i in 0..lunch.len().max(dinner.len()) {
            items.extend(lunch.get(i).cloned());
            items.extend(dinner.get(i).cloned());
        }
        items.extend_from_slice(bucket(MealSlot::Snacks));
        items
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl Serialize for OrganizedPlan {
    /// Serializes as `{"Breakfast": [...], "Lunch": [...], ...}` in bucket order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.meals.len()))?;
        for (slot, items) in &self.meals {
            map.serialize_entry(&slot.to_string(), items)?;
        }
        map.end()
    }
}

/// Result handed to the presentation layer.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlanReport {
    /// Chosen foods in the order the search picked them.
    pub items: Vec<String>,

    pub plan: OrganizedPlan,

    /// Aggregate nutrition of all chosen foods.
    pub totals: Nutrients,

    /// Remaining budget the plan was built against.
    pub target: Nutrients,
}
