//! Ingredient list assembly.
//!
//! Pairs the `strIngredientN` / `strMeasureN` slots of a [`MealRecord`] into
//! display lines of the form `"<ingredient> - <measure>"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::meal::{MealRecord, MAX_INGREDIENTS};

/// Separator between ingredient and measure in a display line.
pub const SEPARATOR: &str = " - ";

/// One ingredient paired with its measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub ingredient: String,
    /// Empty when the record has no measure for this slot.
    pub measure: String,
}

impl IngredientLine {
    pub fn new(ingredient: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            measure: measure.into(),
        }
    }

    /// Split a display line back into its parts on the first separator.
    pub fn parse(line: &str) -> Option<Self> {
        line.split_once(SEPARATOR)
            .map(|(ingredient, measure)| Self::new(ingredient, measure))
    }
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.ingredient, SEPARATOR, self.measure)
    }
}

/// Collect the ingredient lines of a meal in slot order.
///
/// Stops at the first slot whose ingredient is missing or empty; later slots
/// are ignored even when populated. Upstream data is assumed contiguous.
pub fn assemble_ingredients(record: &MealRecord) -> Vec<IngredientLine> {
    let mut lines = Vec::new();

    for index in 1..=MAX_INGREDIENTS {
        let ingredient = match record.ingredient(index) {
            Some(ingredient) if !ingredient.is_empty() => ingredient,
            _ => break,
        };
        let measure = record.measure(index).unwrap_or_default();
        lines.push(IngredientLine::new(ingredient, measure));
    }

    lines
}
