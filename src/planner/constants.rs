/// Maximum number of foods in one plan.
pub const MAX_ITEMS: usize = 8;

/// Allowed calorie deviation for an accepted plan; also the overshoot past the
/// target at which a branch is pruned.
pub const CALORIE_TOLERANCE: f64 = 200.0;

/// Allowed protein deviation (grams) for an accepted plan.
pub const PROTEIN_TOLERANCE: f64 = 15.0;

/// Below this many remaining calories no plan is generated.
pub const MIN_PLANNABLE_CALORIES: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Heuristic weights (per unit of absolute deviation)
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIE_WEIGHT: f64 = 1.0;

/// Protein proximity dominates every other nutrient.
pub const PROTEIN_WEIGHT: f64 = 20.0;

pub const CARB_WEIGHT: f64 = 2.0;

pub const FAT_WEIGHT: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Visited-signature granularity
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie bucket width for state deduplication.
pub const SIGNATURE_CALORIE_BUCKET: f64 = 20.0;

/// Protein bucket width (grams) for state deduplication.
pub const SIGNATURE_PROTEIN_BUCKET: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Repetition caps
// ─────────────────────────────────────────────────────────────────────────────

/// Copies of any single food allowed in one plan.
pub const MAX_REPEATS: usize = 2;

/// Copies of a main dish allowed in one plan.
pub const MAX_MAIN_REPEATS: usize = 1;

/// Name marker of protein-supplement snacks.
pub const PROTEIN_SNACK_MARKER: &str = "Protein";
