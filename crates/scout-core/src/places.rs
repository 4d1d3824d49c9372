//! Place search domain types shared by the client, the extraction engine and
//! the CLI.

use serde::{Deserialize, Serialize};

/// A grounding source attached to a generated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationLink {
    pub title: String,
    pub uri: String,
}

impl CitationLink {
    #[must_use]
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// One structured place reconstructed from a generated answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub name: String,
    pub category: String,
    /// Always finite and within a 5-point scale.
    pub rating: f64,
    pub address: String,
    /// Reconciled citation URI or a synthesized map-search URL. Never empty.
    pub maps_url: String,
    /// Illustrative image derived only from `name`.
    pub image_url: String,
    pub snippet: String,
    /// No authoritative open/closed signal exists, so this is always `true`
    /// for engine output.
    pub is_open: bool,
}

/// Everything a search hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub places: Vec<PlaceRecord>,
    /// The raw generated text, display-only.
    pub summary: String,
    /// Source attributions in the order the provider returned them.
    pub grounding_links: Vec<CitationLink>,
}

/// Geographic bias for a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}
