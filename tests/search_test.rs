use std::collections::HashMap;

use macro_meal_planner::catalog::Catalog;
use macro_meal_planner::models::{DietClass, DietPreference, FoodItem, MealType, Nutrients};
use macro_meal_planner::planner::{MealSearch, SearchConfig, Termination};

fn food(name: &str, cal: f64, pro: f64, meal_type: MealType, diet: DietClass) -> FoodItem {
    FoodItem::new(name, Nutrients::new(cal, pro, 0.0, 0.0), meal_type, diet)
}

/// A: 100 kcal / 10 g protein main, B: 50 kcal / 30 g protein snack.
fn two_food_catalog() -> Catalog {
    Catalog::new(vec![
        food("A", 100.0, 10.0, MealType::Main, DietClass::Veg),
        food("B", 50.0, 30.0, MealType::Snack, DietClass::Veg),
    ])
    .unwrap()
}

fn bounded(limit: usize) -> SearchConfig {
    SearchConfig {
        expansion_limit: Some(limit),
        ..SearchConfig::default()
    }
}

fn assert_plan_rules(catalog: &Catalog, target: &Nutrients, items: &[String]) {
    let totals = catalog.totals(items).unwrap();
    assert!(
        (target.calories - totals.calories).abs() <= 200.0,
        "calories off: {} vs {}",
        totals.calories,
        target.calories
    );
    assert!(
        (target.protein - totals.protein).abs() <= 15.0,
        "protein off: {} vs {}",
        totals.protein,
        target.protein
    );
    assert!(items.len() <= 8, "too many items: {:?}", items);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in items {
        *counts.entry(name.as_str()).or_default() += 1;
    }
    for (name, count) in counts {
        assert!(count <= 2, "{} appears {} times", name, count);
        if catalog.get(name).unwrap().meal_type == MealType::Main {
            assert_eq!(count, 1, "main {} repeated", name);
        }
    }
}

#[test]
fn test_small_catalog_solution_within_tolerance() {
    let catalog = two_food_catalog();
    let target = Nutrients::new(150.0, 40.0, 0.0, 0.0);

    for seed in 0..10 {
        let search = MealSearch::new(
            &catalog,
            target,
            DietPreference::Unrestricted,
            SearchConfig::default(),
        );
        let items = search.run_seeded(seed).solution.expect("plan expected");
        assert_plan_rules(&catalog, &target, &items);
        assert!(items.contains(&"B".to_string()));
    }
}

#[test]
fn test_only_combination_uses_each_food_once() {
    // 300 kcal / 40 g: B alone is 250 kcal short, B twice overshoots protein,
    // so A + B is the only plan within tolerance.
    let catalog = two_food_catalog();
    let target = Nutrients::new(300.0, 40.0, 0.0, 0.0);

    for seed in 0..10 {
        let search = MealSearch::new(
            &catalog,
            target,
            DietPreference::Unrestricted,
            SearchConfig::default(),
        );
        let mut items = search.run_seeded(seed).solution.expect("plan expected");
        items.sort();
        assert_eq!(items, vec!["A".to_string(), "B".to_string()]);
    }
}

#[test]
fn test_builtin_catalog_plans_follow_rules() {
    let catalog = Catalog::builtin();
    let targets = [
        Nutrients::new(900.0, 60.0, 90.0, 30.0),
        Nutrients::new(1500.0, 100.0, 150.0, 50.0),
    ];

    for target in targets {
        for seed in 0..5 {
            let search =
                MealSearch::new(catalog, target, DietPreference::Unrestricted, bounded(3_000));
            let outcome = search.run_seeded(seed);
            match outcome.solution {
                Some(items) => assert_plan_rules(catalog, &target, &items),
                None => assert_eq!(outcome.termination, Termination::ExpansionLimit),
            }
        }
    }
}

#[test]
fn test_vegetarian_plan_has_no_meat() {
    let catalog = Catalog::new(vec![
        food("Grilled Chicken Breast", 200.0, 40.0, MealType::Main, DietClass::NonVeg),
        food("Grilled Tofu Salad", 250.0, 20.0, MealType::Main, DietClass::Veg),
        food("Greek Yogurt", 100.0, 10.0, MealType::Snack, DietClass::Veg),
    ])
    .unwrap();
    let target = Nutrients::new(300.0, 40.0, 0.0, 0.0);

    let search = MealSearch::new(
        &catalog,
        target,
        DietPreference::Vegetarian,
        SearchConfig::default(),
    );
    let mut items = search.run_seeded(11).solution.expect("plan expected");
    items.sort();
    assert_eq!(
        items,
        vec!["Greek Yogurt".to_string(), "Grilled Tofu Salad".to_string()]
    );

    let unrestricted = MealSearch::new(
        &catalog,
        target,
        DietPreference::Unrestricted,
        SearchConfig::default(),
    );
    let items = unrestricted.run_seeded(11).solution.expect("plan expected");
    assert_eq!(items, vec!["Grilled Chicken Breast".to_string()]);
}

#[test]
fn test_vegetarian_builtin_plans_are_vegetarian() {
    let catalog = Catalog::builtin();
    let target = Nutrients::new(1200.0, 80.0, 120.0, 40.0);

    for seed in 0..5 {
        let search = MealSearch::new(catalog, target, DietPreference::Vegetarian, bounded(3_000));
        if let Some(items) = search.run_seeded(seed).solution {
            for name in &items {
                assert_eq!(catalog.get(name).unwrap().diet, DietClass::Veg, "{}", name);
            }
        }
    }
}

#[test]
fn test_same_seed_same_plan() {
    let catalog = Catalog::builtin();
    let target = Nutrients::new(1400.0, 90.0, 140.0, 45.0);

    let search = MealSearch::new(catalog, target, DietPreference::Unrestricted, bounded(3_000));
    let first = search.run_seeded(42);
    let second = search.run_seeded(42);
    assert_eq!(first.solution, second.solution);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_unshuffled_runs_ignore_rng() {
    let catalog = Catalog::builtin();
    let target = Nutrients::new(1000.0, 70.0, 100.0, 35.0);
    let config = SearchConfig {
        shuffle: false,
        ..bounded(3_000)
    };

    let search = MealSearch::new(catalog, target, DietPreference::Unrestricted, config);
    assert_eq!(search.run_seeded(1).solution, search.run_seeded(2).solution);
}

#[test]
fn test_zero_target_accepts_empty_plan() {
    let catalog = Catalog::builtin();
    let search = MealSearch::new(
        catalog,
        Nutrients::ZERO,
        DietPreference::Unrestricted,
        SearchConfig::default(),
    );
    assert_eq!(search.run_seeded(0).solution, Some(Vec::new()));
}

#[test]
fn test_negative_target_terminates_without_plan() {
    let catalog = Catalog::builtin();
    let search = MealSearch::new(
        catalog,
        Nutrients::new(-500.0, 20.0, 0.0, 0.0),
        DietPreference::Unrestricted,
        SearchConfig::default(),
    );
    let outcome = search.run_seeded(0);
    assert_eq!(outcome.solution, None);
    assert_eq!(outcome.termination, Termination::FrontierExhausted);
    assert_eq!(outcome.stats.pruned_calories, 1);
}

#[test]
fn test_protein_shake_capped_at_two() {
    // Three shakes would hit the target exactly; two fall 24 g short.
    let catalog = Catalog::new(vec![food(
        "Whey Protein Shake",
        120.0,
        24.0,
        MealType::Snack,
        DietClass::Veg,
    )])
    .unwrap();
    let search = MealSearch::new(
        &catalog,
        Nutrients::new(360.0, 72.0, 0.0, 0.0),
        DietPreference::Unrestricted,
        SearchConfig::default(),
    );

    let outcome = search.run_seeded(0);
    assert_eq!(outcome.solution, None);
    assert_eq!(outcome.termination, Termination::FrontierExhausted);
    // Root, one shake and two shakes
    assert_eq!(outcome.stats.expanded, 3);
}

#[test]
fn test_unreachable_protein_exhausts_frontier() {
    let catalog = Catalog::new(vec![
        food("Apple", 95.0, 0.5, MealType::Snack, DietClass::Veg),
        food("Banana", 105.0, 1.3, MealType::Snack, DietClass::Veg),
        food("Masala Chai", 100.0, 3.0, MealType::Snack, DietClass::Veg),
    ])
    .unwrap();
    let search = MealSearch::new(
        &catalog,
        Nutrients::new(500.0, 120.0, 0.0, 0.0),
        DietPreference::Unrestricted,
        SearchConfig::default(),
    );

    let outcome = search.run_seeded(5);
    assert!(!outcome.is_found());
    assert_eq!(outcome.termination, Termination::FrontierExhausted);
}

fn five_snack_catalog() -> Catalog {
    let names = ["Apple", "Banana", "Masala Chai", "Sprouts Chaat", "Roasted Chana"];
    Catalog::new(
        names
            .iter()
            .map(|name| food(name, 50.0, 20.0, MealType::Snack, DietClass::Veg))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_item_cap_rejects_longer_plans() {
    // Only nine or more snacks reach 180 g within 15 g
    let catalog = five_snack_catalog();
    let target = Nutrients::new(450.0, 180.0, 0.0, 0.0);
    let config = |max_items| SearchConfig {
        max_items,
        shuffle: false,
        ..SearchConfig::default()
    };

    let capped = MealSearch::new(&catalog, target, DietPreference::Unrestricted, config(8));
    let outcome = capped.run_seeded(0);
    assert_eq!(outcome.solution, None);
    assert_eq!(outcome.termination, Termination::FrontierExhausted);
    assert!(outcome.stats.pruned_depth > 0);

    let relaxed = MealSearch::new(&catalog, target, DietPreference::Unrestricted, config(9));
    let outcome = relaxed.run_seeded(0);
    assert_eq!(outcome.termination, Termination::GoalReached);
    let items = outcome.solution.expect("plan expected");
    assert_eq!(items.len(), 9);
    assert_eq!(outcome.totals, Nutrients::new(450.0, 180.0, 0.0, 0.0));

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &items {
        *counts.entry(name.as_str()).or_default() += 1;
    }
    assert!(counts.values().all(|&c| c <= 2));
}

#[test]
fn test_default_cap_is_eight_items() {
    let catalog = five_snack_catalog();
    let search = MealSearch::new(
        &catalog,
        Nutrients::new(450.0, 180.0, 0.0, 0.0),
        DietPreference::Unrestricted,
        SearchConfig::default(),
    );
    let outcome = search.run_seeded(3);
    assert!(!outcome.is_found());
    assert!(outcome.stats.pruned_depth > 0);
}

#[test]
fn test_tolerance_boundaries_are_inclusive() {
    let catalog = Catalog::new(vec![food(
        "Sprouts Chaat",
        100.0,
        10.0,
        MealType::Snack,
        DietClass::Veg,
    )])
    .unwrap();
    let plan_for = |calories, protein| {
        MealSearch::new(
            &catalog,
            Nutrients::new(calories, protein, 0.0, 0.0),
            DietPreference::Unrestricted,
            SearchConfig::default(),
        )
        .run_seeded(0)
        .solution
        .expect("plan expected")
        .len()
    };

    // One portion lands exactly 200 kcal and 15 g under the target
    assert_eq!(plan_for(300.0, 25.0), 1);
    // Just past either edge a second portion is needed
    assert_eq!(plan_for(300.5, 25.0), 2);
    assert_eq!(plan_for(300.0, 25.5), 2);
}
