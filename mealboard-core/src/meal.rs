//! Meal records as returned by TheMealDB.
//!
//! The API hands back one flat JSON object per meal, with the ingredient list
//! spread across `strIngredient1..=20` and `strMeasure1..=20`. [`MealRecord`]
//! keeps that shape and offers typed accessors on top of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of ingredient/measure slots on a meal record.
pub const MAX_INGREDIENTS: usize = 20;

pub const FIELD_ID: &str = "idMeal";
pub const FIELD_NAME: &str = "strMeal";
pub const FIELD_THUMBNAIL: &str = "strMealThumb";
pub const FIELD_CATEGORY: &str = "strCategory";
pub const FIELD_AREA: &str = "strArea";
pub const FIELD_INSTRUCTIONS: &str = "strInstructions";
pub const FIELD_YOUTUBE: &str = "strYoutube";

/// One meal, keyed by TheMealDB field name.
///
/// Values that are `null`, missing, or not strings all read back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealRecord {
    fields: Map<String, Value>,
}

impl MealRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the record for chaining.
    pub fn with_field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set the ingredient and measure at a 1-based slot.
    pub fn with_ingredient(
        mut self,
        index: usize,
        ingredient: impl Into<String>,
        measure: impl Into<String>,
    ) -> Self {
        self.set(&ingredient_key(index), ingredient);
        self.set(&measure_key(index), measure);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields
            .insert(key.to_string(), Value::String(value.into()));
    }

    /// Raw string value of a field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field(FIELD_ID)
    }

    pub fn name(&self) -> Option<&str> {
        self.field(FIELD_NAME)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.field(FIELD_THUMBNAIL)
    }

    pub fn category(&self) -> Option<&str> {
        self.field(FIELD_CATEGORY)
    }

    pub fn area(&self) -> Option<&str> {
        self.field(FIELD_AREA)
    }

    pub fn instructions(&self) -> Option<&str> {
        self.field(FIELD_INSTRUCTIONS)
    }

    pub fn youtube(&self) -> Option<&str> {
        self.field(FIELD_YOUTUBE)
    }

    /// Ingredient at a 1-based slot.
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.field(&ingredient_key(index))
    }

    /// Measure at a 1-based slot.
    pub fn measure(&self, index: usize) -> Option<&str> {
        self.field(&measure_key(index))
    }
}

fn ingredient_key(index: usize) -> String {
    format!("strIngredient{}", index)
}

fn measure_key(index: usize) -> String {
    format!("strMeasure{}", index)
}

/// Short meal entry from the category filter endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": null,
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": ""
        }"#;
        let record: MealRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), Some("52772"));
        assert_eq!(record.name(), Some("Teriyaki Chicken Casserole"));
        assert_eq!(record.category(), Some("Chicken"));
        assert_eq!(record.area(), None);
        assert_eq!(record.ingredient(1), Some("soy sauce"));
        assert_eq!(record.measure(1), Some("3/4 cup"));
        assert_eq!(record.ingredient(2), Some(""));
        assert_eq!(record.ingredient(3), None);
    }

    #[test]
    fn test_non_string_values_read_as_absent() {
        let record: MealRecord =
            serde_json::from_str(r#"{"idMeal": 52772, "strIngredient1": false}"#).unwrap();
        assert_eq!(record.id(), None);
        assert_eq!(record.ingredient(1), None);
    }

    #[test]
    fn test_builder_sets_paired_slots() {
        let record = MealRecord::new().with_ingredient(4, "eggs", "2");
        assert_eq!(record.field("strIngredient4"), Some("eggs"));
        assert_eq!(record.field("strMeasure4"), Some("2"));
    }

    #[test]
    fn test_summary_without_thumbnail() {
        let summary: MealSummary =
            serde_json::from_str(r#"{"idMeal": "1", "strMeal": "Toast"}"#).unwrap();
        assert_eq!(summary.thumbnail, None);
    }
}
