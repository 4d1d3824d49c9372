//! Pairs extracted places with grounding citation links.

use scout_core::CitationLink;

use crate::urls::maps_search_url;

/// Chooses the `mapsUrl` for the place `name` found in block `block_index`.
///
/// 1. The first link whose title contains the name, or is contained in it,
///    compared case-insensitively.
/// 2. Otherwise `links[block_index % links.len()]`.
/// 3. With no links at all, a map search for the name.
///
/// `block_index` counts every segmented block, including blocks later
/// discarded for lacking a name. When earlier blocks are discarded the
/// positional pick can land on a neighbouring place's link; pairing stays
/// stable for a given answer.
#[must_use]
pub fn reconcile_link(name: &str, block_index: usize, links: &[CitationLink]) -> String {
    if links.is_empty() {
        return maps_search_url(name);
    }

    let needle = name.to_lowercase();
    let chosen = links
        .iter()
        .find(|link| titles_overlap(&link.title, &needle))
        .unwrap_or(&links[block_index % links.len()]);

    if chosen.uri.trim().is_empty() {
        tracing::debug!(name, title = %chosen.title, "citation link has no uri; using map search");
        return maps_search_url(name);
    }
    chosen.uri.clone()
}

fn titles_overlap(title: &str, lowered_name: &str) -> bool {
    let title = title.trim().to_lowercase();
    !title.is_empty() && (title.contains(lowered_name) || lowered_name.contains(&title))
}
