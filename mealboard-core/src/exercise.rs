//! Exercises from the wger API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FetchError};
use crate::http::{endpoint_url, HttpClient};

/// Tags that wger embeds in exercise descriptions.
const DESCRIPTION_TAGS: &[&str] = &["<p>", "</p>", "<ol>", "</ol>", "<li>", "</li>"];

/// wger's id for English.
pub const ENGLISH_LANGUAGE_ID: &str = "2";

/// Page size used when listing exercises.
pub const EXERCISE_PAGE_SIZE: &str = "250";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCategory {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: u32,
}

impl Exercise {
    /// Description with wger's markup tags removed.
    pub fn plain_description(&self) -> String {
        self.description
            .as_deref()
            .map(strip_description_tags)
            .unwrap_or_default()
    }
}

/// Remove the paragraph and list tags wger puts in descriptions.
///
/// Plain substring removal; other markup is left alone.
pub fn strip_description_tags(text: &str) -> String {
    DESCRIPTION_TAGS
        .iter()
        .fold(text.to_string(), |acc, tag| acc.replace(tag, ""))
}

/// Image search query for an exercise.
pub fn image_search_query(exercise_name: &str) -> String {
    format!("{} Exercise", exercise_name)
}

/// Paged list envelope used by wger.
#[derive(Deserialize)]
struct Page<T> {
    results: Vec<T>,
}

/// Client for the wger REST API.
pub struct WgerClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> WgerClient<C> {
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn categories(&self) -> Result<Vec<ExerciseCategory>, ApiError> {
        self.get_results("exercisecategory/", &[]).await
    }

    /// First page of English exercises.
    pub async fn exercises(&self) -> Result<Vec<Exercise>, ApiError> {
        self.get_results(
            "exercise/",
            &[("language", ENGLISH_LANGUAGE_ID), ("limit", EXERCISE_PAGE_SIZE)],
        )
        .await
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let url = endpoint_url(&self.base_url, path, query)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let body = self.http.fetch_text(&url).await?;
        let page: Page<T> = serde_json::from_str(&body).map_err(|source| ApiError::InvalidJson {
            endpoint: path.to_string(),
            source,
        })?;
        tracing::debug!(endpoint = path, count = page.results.len(), "wger: decoded results");
        Ok(page.results)
    }
}
