//! Plain-text output.

use mealboard_core::{
    image_search_query, meal_page_path, CategoryDrift, Exercise, MealSummary, MealView,
};

pub fn meal(view: &MealView) -> String {
    let mut lines = vec![view.name.clone()];

    let info: Vec<&str> = [view.category.as_deref(), view.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !info.is_empty() {
        lines.push(info.join(" | "));
    }
    if let Some(thumbnail) = &view.thumbnail {
        lines.push(format!("Image: {}", thumbnail));
    }
    if let Some(instructions) = &view.instructions {
        lines.push(String::new());
        lines.push(instructions.trim().to_string());
    }

    lines.push(String::new());
    lines.push("Ingredients".to_string());
    lines.extend(view.ingredients.iter().map(|line| format!("  - {}", line)));

    if let Some(video) = &view.video {
        lines.push(String::new());
        lines.push(format!("Video: {}", video));
    }
    if let Some(link) = &view.link {
        lines.push(format!("View meal page: {}", link));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn summary(meal: &MealSummary, category_id: Option<&str>) -> String {
    match category_id {
        Some(category_id) => format!(
            "{:>6}  {}  ({})",
            meal.id,
            meal.name,
            meal_page_path(category_id, &meal.id)
        ),
        None => format!("{:>6}  {}", meal.id, meal.name),
    }
}

pub fn drift(entry: &CategoryDrift) -> String {
    match entry {
        CategoryDrift::MissingLocally { name, remote_id } => {
            format!("missing locally:  {} (remote id {})", name, remote_id)
        }
        CategoryDrift::MissingRemotely { name, local_id } => {
            format!("missing remotely: {} (local id {})", name, local_id)
        }
        CategoryDrift::IdMismatch {
            name,
            local_id,
            remote_id,
        } => format!(
            "id mismatch:      {} (local {}, remote {})",
            name, local_id, remote_id
        ),
    }
}

pub fn exercise(exercise: &Exercise) -> String {
    let mut out = format!("{:>5}  {}", exercise.id, exercise.name);
    let description = exercise.plain_description();
    if !description.trim().is_empty() {
        out.push_str(&format!("\n       {}", description.trim()));
    }
    out.push_str(&format!(
        "\n       image search: {}",
        image_search_query(&exercise.name)
    ));
    out
}
