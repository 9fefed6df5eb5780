//! Meal subcommands.

use anyhow::{bail, Context, Result};
use mealboard_core::{
    find_drift, meal_page_path, resolve_category, ApiConfig, HttpClient, MealDbClient,
    MealRecord, MealView, ReqwestClient, MEAL_CATEGORIES,
};

use crate::render;
use crate::{http_client, Format};

pub fn client(config: &ApiConfig) -> Result<MealDbClient<ReqwestClient>> {
    Ok(MealDbClient::new(
        http_client(config)?,
        config.mealdb_base_url.clone(),
    ))
}

pub async fn lookup<C: HttpClient>(
    client: &MealDbClient<C>,
    id: &str,
    format: Format,
) -> Result<()> {
    let meal = client
        .lookup(id)
        .await
        .with_context(|| format!("Failed to look up meal {}", id))?;

    match meal {
        Some(meal) => print_meal(&meal, format),
        None => bail!("No meal with id {}", id),
    }
}

pub async fn search<C: HttpClient>(
    client: &MealDbClient<C>,
    term: &str,
    format: Format,
) -> Result<()> {
    let meals = client
        .search(term)
        .await
        .with_context(|| format!("Failed to search for '{}'", term))?;
    let views: Vec<MealView> = meals.iter().map(MealView::from_record).collect();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&views)?),
        Format::Text if views.is_empty() => {
            println!("There are no search results for '{}'.", term);
        }
        Format::Text => {
            println!("Search results for '{}':", term);
            for view in &views {
                println!();
                print!("{}", render::meal(view));
            }
        }
    }

    Ok(())
}

pub async fn random<C: HttpClient>(client: &MealDbClient<C>, format: Format) -> Result<()> {
    let meal = client
        .random()
        .await
        .context("Failed to fetch a random meal")?;

    match meal {
        Some(meal) => print_meal(&meal, format),
        None => bail!("The API returned no random meal"),
    }
}

pub async fn category<C: HttpClient>(
    client: &MealDbClient<C>,
    name: &str,
    format: Format,
) -> Result<()> {
    let meals = client
        .filter_by_category(name)
        .await
        .with_context(|| format!("Failed to list category '{}'", name))?;
    if meals.is_empty() {
        bail!("No meals in category '{}'", name);
    }
    let category_id = resolve_category(name);
    if category_id.is_none() {
        tracing::warn!(category = name, "category not in table, meal links omitted");
    }

    match format {
        Format::Json => {
            let entries: Vec<serde_json::Value> = meals
                .iter()
                .map(|meal| {
                    serde_json::json!({
                        "id": meal.id,
                        "name": meal.name,
                        "thumbnail": meal.thumbnail,
                        "link": category_id.map(|c| meal_page_path(c, &meal.id)),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Format::Text => {
            for meal in &meals {
                println!("{}", render::summary(meal, category_id));
            }
        }
    }

    Ok(())
}

pub fn categories(format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let table: Vec<serde_json::Value> = MEAL_CATEGORIES
                .iter()
                .map(|&(name, id)| serde_json::json!({ "name": name, "id": id }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Format::Text => {
            for &(name, id) in MEAL_CATEGORIES {
                println!("{:>3}  {}", id, name);
            }
        }
    }
    Ok(())
}

/// Exits non-zero when the table and the API disagree.
pub async fn check_categories<C: HttpClient>(
    client: &MealDbClient<C>,
    format: Format,
) -> Result<()> {
    let remote = client
        .categories()
        .await
        .context("Failed to fetch categories")?;
    let drift = find_drift(&remote);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&drift)?),
        Format::Text if drift.is_empty() => {
            println!("Category table matches {} remote categories.", remote.len());
        }
        Format::Text => {
            for entry in &drift {
                println!("{}", render::drift(entry));
            }
        }
    }

    if !drift.is_empty() {
        bail!("{} category table difference(s) found", drift.len());
    }
    Ok(())
}

fn print_meal(meal: &MealRecord, format: Format) -> Result<()> {
    let view = MealView::from_record(meal);
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        Format::Text => print!("{}", render::meal(&view)),
    }
    Ok(())
}
