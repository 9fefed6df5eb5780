//! TheMealDB API client.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::category::RemoteCategory;
use crate::error::{ApiError, FetchError};
use crate::http::{endpoint_url, HttpClient};
use crate::meal::{MealRecord, MealSummary};

/// Envelope shared by the meal endpoints; `meals` is `null` when nothing matched.
#[derive(Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<RemoteCategory>,
}

/// Client for the TheMealDB JSON API.
pub struct MealDbClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> MealDbClient<C> {
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Fetch one meal by id. `None` when the id is unknown.
    pub async fn lookup(&self, meal_id: &str) -> Result<Option<MealRecord>, ApiError> {
        let meals: Vec<MealRecord> = self.get_meals("lookup.php", &[("i", meal_id)]).await?;
        Ok(meals.into_iter().next())
    }

    /// Search meals by name. Blank terms are rejected without a request.
    pub async fn search(&self, term: &str) -> Result<Vec<MealRecord>, ApiError> {
        if term.trim().is_empty() {
            return Err(ApiError::EmptySearchTerm);
        }
        self.get_meals("search.php", &[("s", term)]).await
    }

    /// Fetch a random meal.
    pub async fn random(&self) -> Result<Option<MealRecord>, ApiError> {
        let meals: Vec<MealRecord> = self.get_meals("random.php", &[]).await?;
        Ok(meals.into_iter().next())
    }

    /// List the meals in a category, by category name.
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, ApiError> {
        self.get_meals("filter.php", &[("c", category)]).await
    }

    /// List the categories the API currently knows.
    pub async fn categories(&self) -> Result<Vec<RemoteCategory>, ApiError> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php", &[]).await?;
        Ok(envelope.categories)
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let envelope: MealsEnvelope<T> = self.get_json(path, query).await?;
        let meals = envelope.meals.unwrap_or_default();
        tracing::debug!(endpoint = path, count = meals.len(), "mealdb: decoded meals");
        Ok(meals)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = endpoint_url(&self.base_url, path, query)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let body = self.http.fetch_text(&url).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::InvalidJson {
            endpoint: path.to_string(),
            source,
        })
    }
}
