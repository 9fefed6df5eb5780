pub mod category;
pub mod config;
pub mod error;
pub mod exercise;
pub mod http;
pub mod ingredients;
pub mod links;
pub mod meal;
pub mod mealdb;
pub mod view;

pub use category::{find_drift, resolve_category, CategoryDrift, RemoteCategory, MEAL_CATEGORIES};
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, FetchError};
pub use exercise::{
    image_search_query, strip_description_tags, Exercise, ExerciseCategory, WgerClient,
};
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};
pub use ingredients::{assemble_ingredients, IngredientLine};
pub use links::{embeddable_youtube_url, meal_page_link, meal_page_path};
pub use meal::{MealRecord, MealSummary, MAX_INGREDIENTS};
pub use mealdb::MealDbClient;
pub use view::MealView;
