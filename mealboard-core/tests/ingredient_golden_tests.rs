//! Golden file tests for ingredient assembly.
//!
//! Each JSON file in `fixtures/meals/` holds a TheMealDB meal record and the
//! ingredient lines expected from it.
//!
//! Test format:
//! ```json
//! {
//!   "description": "...",
//!   "record": { "idMeal": "52772", "strIngredient1": "soy sauce", ... },
//!   "expected": ["soy sauce - 3/4 cup"]
//! }
//! ```

use glob::glob;
use mealboard_core::{assemble_ingredients, IngredientLine, MealRecord};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    #[allow(dead_code)]
    description: String,
    record: MealRecord,
    expected: Vec<String>,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/meals");
    let pattern = fixtures_dir.join("*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    assert!(
        !cases.is_empty(),
        "No test fixtures found in {:?}",
        fixtures_dir
    );
    cases
}

#[test]
fn test_ingredient_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {}", name);

        let actual: Vec<String> = assemble_ingredients(&case.record)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            actual, case.expected,
            "Ingredient lines mismatch for {}\n\nExpected:\n{:#?}\n\nActual:\n{:#?}",
            name, case.expected, actual
        );
    }
}

#[test]
fn test_golden_lines_parse_back_to_record_slots() {
    for (name, case) in load_test_cases() {
        for (i, line) in case.expected.iter().enumerate() {
            let parsed = IngredientLine::parse(line)
                .unwrap_or_else(|| panic!("{}: line {:?} has no separator", name, line));
            assert_eq!(
                Some(parsed.ingredient.as_str()),
                case.record.ingredient(i + 1),
                "Ingredient mismatch for {} slot {}",
                name,
                i + 1
            );
            assert_eq!(
                parsed.measure.as_str(),
                case.record.measure(i + 1).unwrap_or_default(),
                "Measure mismatch for {} slot {}",
                name,
                i + 1
            );
        }
    }
}
