//! Site links and embeddable media URLs.

use crate::category::resolve_category;
use crate::meal::MealRecord;

/// Path of a meal's page: `/meals/<category_id>/<meal_id>`.
pub fn meal_page_path(category_id: &str, meal_id: &str) -> String {
    format!("/meals/{}/{}", category_id, meal_id)
}

/// Page path for a record, if both its category and id are known.
pub fn meal_page_link(record: &MealRecord) -> Option<String> {
    let category_id = record.category().and_then(resolve_category)?;
    let meal_id = record.id().filter(|id| !id.is_empty())?;
    Some(meal_page_path(category_id, meal_id))
}

/// Rewrite a YouTube watch URL into its embeddable form.
///
/// `https://www.youtube.com/watch?v=abc` becomes
/// `https://www.youtube.com/embed/abc`. Anything else is returned unchanged.
pub fn embeddable_youtube_url(url: &str) -> String {
    url.replacen("watch?v=", "embed/", 1)
}
