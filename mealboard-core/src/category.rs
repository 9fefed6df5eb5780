//! Meal category name to TheMealDB category id.
//!
//! The random and search endpoints return a meal's category by name only, but
//! meal page links need the numeric id. The table below mirrors the ids that
//! `categories.php` reported when it was written; [`find_drift`] reports when
//! the two disagree. Nothing updates the table at runtime.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Known categories in id order.
pub const MEAL_CATEGORIES: &[(&str, &str)] = &[
    ("Beef", "1"),
    ("Chicken", "2"),
    ("Dessert", "3"),
    ("Lamb", "4"),
    ("Miscellaneous", "5"),
    ("Pasta", "6"),
    ("Pork", "7"),
    ("Seafood", "8"),
    ("Side", "9"),
    ("Starter", "10"),
    ("Vegan", "11"),
    ("Vegetarian", "12"),
    ("Breakfast", "13"),
    ("Goat", "14"),
];

static CATEGORY_IDS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| MEAL_CATEGORIES.iter().copied().collect());

/// Look up the category id for a category name.
///
/// Exact, case-sensitive match. Unknown names return `None`; callers should
/// treat that as "no link available".
pub fn resolve_category(name: &str) -> Option<&'static str> {
    CATEGORY_IDS.get(name).copied()
}

/// Category entry from the `categories.php` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCategory {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// A disagreement between the local table and the live category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryDrift {
    /// The API lists a category the table does not know.
    MissingLocally { name: String, remote_id: String },
    /// The table knows a category the API no longer lists.
    MissingRemotely { name: String, local_id: String },
    /// Both know the category but disagree on its id.
    IdMismatch {
        name: String,
        local_id: String,
        remote_id: String,
    },
}

/// Compare the local table with a live category listing.
///
/// Results list remote-side differences in remote order, then categories
/// missing remotely in table order.
pub fn find_drift(remote: &[RemoteCategory]) -> Vec<CategoryDrift> {
    let mut drift = Vec::new();

    for category in remote {
        match resolve_category(&category.name) {
            None => drift.push(CategoryDrift::MissingLocally {
                name: category.name.clone(),
                remote_id: category.id.clone(),
            }),
            Some(local_id) if local_id != category.id => drift.push(CategoryDrift::IdMismatch {
                name: category.name.clone(),
                local_id: local_id.to_string(),
                remote_id: category.id.clone(),
            }),
            Some(_) => {}
        }
    }

    for &(name, local_id) in MEAL_CATEGORIES {
        if !remote.iter().any(|c| c.name == name) {
            drift.push(CategoryDrift::MissingRemotely {
                name: name.to_string(),
                local_id: local_id.to_string(),
            });
        }
    }

    drift
}
