//! Exercise subcommands.

use anyhow::{bail, Context, Result};
use mealboard_core::{
    image_search_query, ApiConfig, Exercise, HttpClient, ReqwestClient, WgerClient,
};

use crate::render;
use crate::{http_client, Format};

pub fn client(config: &ApiConfig) -> Result<WgerClient<ReqwestClient>> {
    Ok(WgerClient::new(
        http_client(config)?,
        config.wger_base_url.clone(),
    ))
}

pub async fn categories<C: HttpClient>(client: &WgerClient<C>, format: Format) -> Result<()> {
    let categories = client
        .categories()
        .await
        .context("Failed to fetch exercise categories")?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
        Format::Text => {
            for category in &categories {
                println!("{:>3}  {}", category.id, category.name);
            }
        }
    }
    Ok(())
}

pub async fn list<C: HttpClient>(
    client: &WgerClient<C>,
    category: Option<u32>,
    format: Format,
) -> Result<()> {
    let exercises = client
        .exercises()
        .await
        .context("Failed to fetch exercises")?;
    let exercises = in_category(exercises, category)?;

    match format {
        Format::Json => {
            let entries: Vec<serde_json::Value> = exercises
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id,
                        "name": e.name,
                        "category": e.category,
                        "description": e.plain_description(),
                        "image_query": image_search_query(&e.name),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Format::Text => {
            for exercise in &exercises {
                println!("{}", render::exercise(exercise));
            }
        }
    }
    Ok(())
}

/// Keep the exercises of one category; an empty result is an error.
fn in_category(mut exercises: Vec<Exercise>, category: Option<u32>) -> Result<Vec<Exercise>> {
    if let Some(category) = category {
        exercises.retain(|e| e.category == category);
        if exercises.is_empty() {
            bail!("No exercises in category {}", category);
        }
    }
    Ok(exercises)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealboard_core::MockClient;

    const EXERCISES_URL: &str = "https://wger.test/api/v2/exercise/?language=2&limit=250";

    const EXERCISES_BODY: &str = r#"{"count": 3, "next": null, "results": [
        {"id": 192, "name": "Bench Press", "description": "<p>Press.</p>", "category": 11},
        {"id": 91, "name": "Crunches", "description": "<p>Curl up.</p>", "category": 10},
        {"id": 111, "name": "Squats", "description": "", "category": 9}
    ]}"#;

    fn client_with(url: &str, body: &str) -> WgerClient<MockClient> {
        WgerClient::new(
            MockClient::new().with_text(url, body),
            "https://wger.test/api/v2",
        )
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let client = client_with(EXERCISES_URL, EXERCISES_BODY);
        let exercises = client.exercises().await.unwrap();

        let abs = in_category(exercises.clone(), Some(10)).unwrap();
        assert_eq!(abs.iter().map(|e| e.id).collect::<Vec<_>>(), vec![91]);

        let all = in_category(exercises, None).unwrap();
        assert_eq!(all.len(), 3);

        assert!(list(&client, Some(10), Format::Json).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_unknown_category_fails() {
        let client = client_with(EXERCISES_URL, EXERCISES_BODY);
        let err = list(&client, Some(99), Format::Text).await.unwrap_err();
        assert!(err.to_string().contains("No exercises in category 99"));
    }

    #[tokio::test]
    async fn test_list_without_filter() {
        let client = client_with(EXERCISES_URL, EXERCISES_BODY);
        assert!(list(&client, None, Format::Text).await.is_ok());
    }

    #[tokio::test]
    async fn test_categories_decode() {
        let client = client_with(
            "https://wger.test/api/v2/exercisecategory/",
            r#"{"count": 2, "results": [{"id": 10, "name": "Abs"}, {"id": 8, "name": "Arms"}]}"#,
        );
        assert!(categories(&client, Format::Text).await.is_ok());
    }
}
