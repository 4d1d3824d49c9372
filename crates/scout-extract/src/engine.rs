//! Single-pass orchestration of segmentation, field extraction, link
//! reconciliation and the citation fallback.

use scout_core::{CitationLink, PlaceRecord, SearchResponse};

use crate::fallback::synthesize_from_links;
use crate::fields::extract_fields;
use crate::reconcile::reconcile_link;
use crate::segment::segment_blocks;

/// Which path produced the places of an [`Extraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// At least one block carried a place name.
    Structured,
    /// No block carried a name; places were synthesized from citation links.
    CitationFallback,
    /// Neither blocks nor links produced anything.
    Empty,
}

/// Result of one engine pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub places: Vec<PlaceRecord>,
    pub mode: ExtractionMode,
    /// Candidate blocks produced by segmentation.
    pub blocks: usize,
    /// Blocks dropped for lacking a place name.
    pub discarded: usize,
}

/// Reconstructs places from a generated answer and its citation links.
///
/// Pure and deterministic: identical inputs always produce identical output.
/// Never fails; malformed text yields fewer or less specific places.
#[must_use]
pub fn extract_places(text: &str, links: &[CitationLink], query: &str) -> Extraction {
    let blocks = segment_blocks(text);
    let mut places = Vec::new();
    let mut discarded = 0usize;

    // The index runs over every block, discarded ones included, so that the
    // positional link pick is tied to segmentation rather than to survivors.
    for (block_index, block) in blocks.iter().enumerate() {
        let fields = extract_fields(block);
        let Some(name) = fields.name.as_deref() else {
            discarded += 1;
            continue;
        };
        let maps_url = reconcile_link(name, block_index, links);
        match fields.into_record(query, maps_url) {
            Some(place) => places.push(place),
            None => discarded += 1,
        }
    }

    let mode = if !places.is_empty() {
        ExtractionMode::Structured
    } else if links.is_empty() {
        ExtractionMode::Empty
    } else {
        places = synthesize_from_links(links, query);
        if places.is_empty() {
            ExtractionMode::Empty
        } else {
            ExtractionMode::CitationFallback
        }
    };

    tracing::debug!(
        query,
        blocks = blocks.len(),
        discarded,
        links = links.len(),
        places = places.len(),
        mode = ?mode,
        "extracted places"
    );

    Extraction {
        places,
        mode,
        blocks: blocks.len(),
        discarded,
    }
}

/// Packages extracted places with the raw text and links, which are passed
/// through untouched for display.
#[must_use]
pub fn build_search_response(
    text: String,
    links: Vec<CitationLink>,
    query: &str,
) -> SearchResponse {
    let extraction = extract_places(&text, &links, query);
    SearchResponse {
        places: extraction.places,
        summary: text,
        grounding_links: links,
    }
}
