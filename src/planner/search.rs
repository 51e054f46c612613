use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::models::{DietPreference, FoodItem, MealType, NutrientTarget, Nutrients};
use crate::planner::constants::*;
use crate::planner::heuristic::HeuristicWeights;

/// Runtime knobs of the meal search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub max_items: usize,
    pub calorie_tolerance: f64,
    pub protein_tolerance: f64,
    pub weights: HeuristicWeights,
    /// Shuffle the expansion order at every step for variety between runs.
    pub shuffle: bool,
    /// Stop after this many expansions. `None` runs until the frontier drains.
    pub expansion_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            calorie_tolerance: CALORIE_TOLERANCE,
            protein_tolerance: PROTEIN_TOLERANCE,
            weights: HeuristicWeights::default(),
            shuffle: true,
            expansion_limit: None,
        }
    }
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    GoalReached,
    FrontierExhausted,
    ExpansionLimit,
}

/// Counters collected over one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub popped: usize,
    pub expanded: usize,
    pub pushed: usize,
    pub pruned_depth: usize,
    pub pruned_calories: usize,
    pub duplicates: usize,
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Chosen food names in pick order, `None` when no combination passed the
    /// goal test.
    pub solution: Option<Vec<String>>,
    /// Aggregate nutrients of the solution, zero when none was found.
    pub totals: Nutrients,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.solution.is_some()
    }
}

/// A partial plan. Children are new states; a state is never modified.
#[derive(Debug, Clone)]
struct SearchState {
    /// Indices into the working food list, in pick order.
    items: Vec<usize>,
    aggregate: Nutrients,
    cost: usize,
    priority: f64,
}

impl SearchState {
    fn root(priority: f64) -> Self {
        Self {
            items: Vec::new(),
            aggregate: Nutrients::ZERO,
            cost: 0,
            priority,
        }
    }

    fn count(&self, idx: usize) -> usize {
        self.items.iter().filter(|&&i| i == idx).count()
    }
}

/// Coarsened key of a state used to skip equivalent re-expansions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VisitedSignature {
    calorie_bucket: i64,
    protein_bucket: i64,
    items: Vec<usize>,
}

impl VisitedSignature {
    fn of(state: &SearchState) -> Self {
        let mut items = state.items.clone();
        items.sort_unstable();
        Self {
            calorie_bucket: (state.aggregate.calories / SIGNATURE_CALORIE_BUCKET).trunc() as i64,
            protein_bucket: (state.aggregate.protein / SIGNATURE_PROTEIN_BUCKET).trunc() as i64,
            items,
        }
    }
}

/// Frontier entry: lowest priority pops first, then earliest pushed.
#[derive(Debug)]
struct FrontierEntry {
    seq: u64,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed
        other
            .state
            .priority
            .total_cmp(&self.state.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Whether one more copy of `food` may join a plan already holding `count`.
pub fn repetition_allows(food: &FoodItem, count: usize) -> bool {
    if food.meal_type == MealType::Main && count >= MAX_MAIN_REPEATS {
        return false;
    }
    if count >= MAX_REPEATS {
        return false;
    }
    // Protein snacks get the same cap as everything else. This branch can
    // never admit an extra copy; widening it needs a product decision.
    if food.meal_type == MealType::Snack
        && food.name.contains(PROTEIN_SNACK_MARKER)
        && count >= MAX_REPEATS
    {
        return false;
    }
    true
}

/// Best-first search for a food combination close to a nutrient target.
pub struct MealSearch<'a> {
    foods: Vec<&'a FoodItem>,
    target: NutrientTarget,
    config: SearchConfig,
}

impl<'a> MealSearch<'a> {
    /// Search over the catalog foods allowed by `preference`.
    pub fn new(
        catalog: &'a Catalog,
        target: NutrientTarget,
        preference: DietPreference,
        config: SearchConfig,
    ) -> Self {
        Self::from_foods(catalog.filter(preference), target, config)
    }

    /// Search over an already filtered working set.
    pub fn from_foods(
        foods: Vec<&'a FoodItem>,
        target: NutrientTarget,
        config: SearchConfig,
    ) -> Self {
        Self {
            foods,
            target,
            config,
        }
    }

    pub fn target(&self) -> &NutrientTarget {
        &self.target
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Calories and protein both within tolerance of the target.
    pub fn is_goal(&self, aggregate: &Nutrients) -> bool {
        (self.target.calories - aggregate.calories).abs() <= self.config.calorie_tolerance
            && (self.target.protein - aggregate.protein).abs() <= self.config.protein_tolerance
    }

    fn priority(&self, cost: usize, aggregate: &Nutrients) -> f64 {
        cost as f64 + self.config.weights.distance(&self.target, aggregate)
    }

    fn child(&self, parent: &SearchState, idx: usize) -> SearchState {
        let mut items = Vec::with_capacity(parent.items.len() + 1);
        items.extend_from_slice(&parent.items);
        items.push(idx);

        let aggregate = parent.aggregate + self.foods[idx].nutrients();
        let cost = parent.cost + 1;
        SearchState {
            items,
            aggregate,
            cost,
            priority: self.priority(cost, &aggregate),
        }
    }

    fn names(&self, state: &SearchState) -> Vec<String> {
        state
            .items
            .iter()
            .map(|&i| self.foods[i].name.clone())
            .collect()
    }

    /// Run the search, drawing expansion order from `rng`.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SearchOutcome {
        let mut stats = SearchStats::default();
        let mut frontier = BinaryHeap::new();
        let mut visited: HashSet<VisitedSignature> = HashSet::new();
        let mut order: Vec<usize> = (0..self.foods.len()).collect();
        let mut seq: u64 = 0;

        let calorie_ceiling = self.target.calories + self.config.calorie_tolerance;

        frontier.push(FrontierEntry {
            seq,
            state: SearchState::root(self.priority(0, &Nutrients::ZERO)),
        });
        stats.pushed += 1;

        let mut termination = Termination::FrontierExhausted;
        let mut solution = None;
        let mut totals = Nutrients::ZERO;

        while let Some(FrontierEntry { state, .. }) = frontier.pop() {
            stats.popped += 1;

            if self.is_goal(&state.aggregate) {
                termination = Termination::GoalReached;
                solution = Some(self.names(&state));
                totals = state.aggregate;
                break;
            }

            if state.items.len() >= self.config.max_items {
                stats.pruned_depth += 1;
                continue;
            }
            if state.aggregate.calories > calorie_ceiling {
                stats.pruned_calories += 1;
                continue;
            }
            if !visited.insert(VisitedSignature::of(&state)) {
                stats.duplicates += 1;
                continue;
            }

            if let Some(limit) = self.config.expansion_limit {
                if stats.expanded >= limit {
                    termination = Termination::ExpansionLimit;
                    break;
                }
            }
            stats.expanded += 1;

            if self.config.shuffle {
                order.shuffle(rng);
            }

            trace!(
                depth = state.items.len(),
                priority = state.priority,
                calories = state.aggregate.calories,
                protein = state.aggregate.protein,
                "expanding state"
            );

            for &idx in &order {
                if !repetition_allows(self.foods[idx], state.count(idx)) {
                    continue;
                }
                seq += 1;
                frontier.push(FrontierEntry {
                    seq,
                    state: self.child(&state, idx),
                });
                stats.pushed += 1;
            }
        }

        debug!(
            ?termination,
            foods = self.foods.len(),
            popped = stats.popped,
            expanded = stats.expanded,
            pushed = stats.pushed,
            duplicates = stats.duplicates,
            "meal search finished"
        );

        SearchOutcome {
            solution,
            totals,
            termination,
            stats,
        }
    }

    /// Run with a generator seeded from `seed`, for reproducible plans.
    pub fn run_seeded(&self, seed: u64) -> SearchOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        self.run(&mut rng)
    }

    /// Chosen food names, or `None` when nothing passed the goal test.
    pub fn solve<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<String>> {
        self.run(rng).solution
    }
}
