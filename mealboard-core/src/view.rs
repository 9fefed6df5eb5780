//! Everything a renderer needs to show one meal.

use serde::Serialize;

use crate::ingredients::{assemble_ingredients, IngredientLine};
use crate::links::{embeddable_youtube_url, meal_page_link};
use crate::meal::MealRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealView {
    pub id: Option<String>,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<IngredientLine>,
    /// Site path of the meal page; `None` when the category is not in the table.
    pub link: Option<String>,
    pub video: Option<String>,
}

impl MealView {
    pub fn from_record(record: &MealRecord) -> Self {
        Self {
            id: owned(record.id()),
            name: record.name().unwrap_or_default().to_string(),
            thumbnail: owned(record.thumbnail()),
            category: owned(record.category()),
            area: owned(record.area()),
            instructions: owned(record.instructions()),
            ingredients: assemble_ingredients(record),
            link: meal_page_link(record),
            video: record
                .youtube()
                .filter(|url| !url.is_empty())
                .map(embeddable_youtube_url),
        }
    }
}

/// Empty strings count as missing; the API uses both.
fn owned(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_full_record() {
        let record = MealRecord::new()
            .with_field("idMeal", "52772")
            .with_field("strMeal", "Teriyaki Chicken Casserole")
            .with_field("strCategory", "Chicken")
            .with_field("strArea", "Japanese")
            .with_field("strYoutube", "https://www.youtube.com/watch?v=4aZr5hZXP_s")
            .with_ingredient(1, "soy sauce", "3/4 cup");

        let view = MealView::from_record(&record);
        assert_eq!(view.id.as_deref(), Some("52772"));
        assert_eq!(view.name, "Teriyaki Chicken Casserole");
        assert_eq!(view.link.as_deref(), Some("/meals/2/52772"));
        assert_eq!(
            view.video.as_deref(),
            Some("https://www.youtube.com/embed/4aZr5hZXP_s")
        );
        assert_eq!(view.ingredients, vec![IngredientLine::new("soy sauce", "3/4 cup")]);
    }

    #[test]
    fn test_view_from_sparse_record() {
        let record = MealRecord::new()
            .with_field("strMeal", "Mystery")
            .with_field("strArea", "")
            .with_field("strCategory", "Soup");

        let view = MealView::from_record(&record);
        assert_eq!(view.area, None);
        assert_eq!(view.category.as_deref(), Some("Soup"));
        assert_eq!(view.link, None);
        assert_eq!(view.video, None);
        assert!(view.ingredients.is_empty());
    }

    #[test]
    fn test_view_serializes_ingredient_pairs() {
        let record = MealRecord::new().with_ingredient(1, "rice", "1 cup");
        let json = serde_json::to_value(MealView::from_record(&record)).unwrap();
        assert_eq!(
            json["ingredients"],
            serde_json::json!([{ "ingredient": "rice", "measure": "1 cup" }])
        );
    }
}
