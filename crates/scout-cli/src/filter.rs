//! Presentation-side narrowing of a result list.

use scout_core::{PlaceRecord, SearchResponse};

/// Category value meaning "no category filter".
pub(crate) const ALL_CATEGORIES: &str = "All";

/// Keeps places rated at least `min_rating` and, unless `category` is `None`
/// or `"All"`, exactly matching `category`. Order is preserved.
pub(crate) fn filter_places<'a>(
    places: &'a [PlaceRecord],
    min_rating: f64,
    category: Option<&str>,
) -> Vec<&'a PlaceRecord> {
    let category = category.filter(|c| *c != ALL_CATEGORIES);
    places
        .iter()
        .filter(|p| p.rating >= min_rating)
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}

/// A copy of `response` whose places went through [`filter_places`]. The
/// summary and grounding links are kept whole.
pub(crate) fn filtered_response(
    response: &SearchResponse,
    min_rating: f64,
    category: Option<&str>,
) -> SearchResponse {
    SearchResponse {
        places: filter_places(&response.places, min_rating, category)
            .into_iter()
            .cloned()
            .collect(),
        summary: response.summary.clone(),
        grounding_links: response.grounding_links.clone(),
    }
}

/// `"All"` followed by each distinct category in first-appearance order.
pub(crate) fn unique_categories(places: &[PlaceRecord]) -> Vec<&str> {
    let mut categories = vec![ALL_CATEGORIES];
    for place in places {
        if !categories.contains(&place.category.as_str()) {
            categories.push(&place.category);
        }
    }
    categories
}
