//! Gemini `generateContent` request and response shapes.
//!
//! Only the fields the search needs are modelled. Everything in the response
//! is optional because the API omits empty collections.

use scout_core::{CitationLink, UserLocation};
use serde::{Deserialize, Serialize};

/// The raw outcome of one grounded generation: the answer text plus the
/// citation links attached to it, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundedAnswer {
    pub text: String,
    pub links: Vec<CitationLink>,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

impl GenerateContentRequest {
    /// A single-turn prompt with Maps and Search grounding, biased toward
    /// `location` when one is known.
    #[must_use]
    pub fn grounded(prompt: String, location: Option<UserLocation>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            tools: vec![Tool::google_maps(), Tool::google_search()],
            tool_config: location.map(|loc| ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: loc.latitude,
                        longitude: loc.longitude,
                    },
                },
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Serializes to `{}`.
#[derive(Debug, Default, Serialize)]
pub struct EmptyObject {}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<EmptyObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<EmptyObject>,
}

impl Tool {
    #[must_use]
    pub fn google_maps() -> Self {
        Self {
            google_maps: Some(EmptyObject {}),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn google_search() -> Self {
        Self {
            google_search: Some(EmptyObject {}),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    /// Thinking models mark their reasoning parts; those are not answer text.
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding source. The API fills either `maps` or `web`.
#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub maps: Option<ChunkSource>,
    #[serde(default)]
    pub web: Option<ChunkSource>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl GroundingChunk {
    /// Converts the chunk to a citation link, preferring the `maps` source.
    ///
    /// Returns `None` when neither source carries a non-empty title and uri.
    #[must_use]
    pub fn to_citation_link(&self) -> Option<CitationLink> {
        [self.maps.as_ref(), self.web.as_ref()]
            .into_iter()
            .flatten()
            .find_map(|source| {
                let title = source.title.as_deref()?.trim();
                let uri = source.uri.as_deref()?.trim();
                (!title.is_empty() && !uri.is_empty()).then(|| CitationLink::new(title, uri))
            })
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate.
    #[must_use]
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Citation links of the first candidate, in provider order. Chunks
    /// without a usable title and uri are dropped.
    #[must_use]
    pub fn citation_links(&self) -> Vec<CitationLink> {
        let Some(metadata) = self
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
        else {
            return Vec::new();
        };

        let links: Vec<CitationLink> = metadata
            .grounding_chunks
            .iter()
            .filter_map(GroundingChunk::to_citation_link)
            .collect();

        let dropped = metadata.grounding_chunks.len() - links.len();
        if dropped > 0 {
            tracing::warn!(dropped, "skipped grounding chunks without title or uri");
        }
        links
    }

    #[must_use]
    pub fn into_answer(self) -> GroundedAnswer {
        GroundedAnswer {
            text: self.text(),
            links: self.citation_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_location_omits_tool_config() {
        let request = GenerateContentRequest::grounded("hi".to_string(), None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "hi" }] }],
                "tools": [{ "googleMaps": {} }, { "googleSearch": {} }]
            })
        );
    }

    #[test]
    fn request_with_location_sets_lat_lng() {
        let location = UserLocation {
            latitude: 8.96,
            longitude: 77.3,
        };
        let request = GenerateContentRequest::grounded("hi".to_string(), Some(location));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"],
            serde_json::json!({ "latitude": 8.96, "longitude": 77.3 })
        );
    }

    #[test]
    fn response_text_joins_parts_and_skips_thoughts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "thinking...", "thought": true },
                    { "text": "Place Name: A\n" },
                    { "text": "Rating: 4.1" }
                ]}
            }]
        }))
        .unwrap();
        assert_eq!(response.text(), "Place Name: A\nRating: 4.1");
    }

    #[test]
    fn empty_response_has_no_text_or_links() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(response.citation_links().is_empty());
    }

    #[test]
    fn citation_links_map_maps_and_web_chunks_in_order() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "groundingMetadata": { "groundingChunks": [
                    { "web": { "title": "Guide", "uri": "https://guide.example" } },
                    { "maps": { "title": "Acme Gym", "uri": "https://maps.example/acme" } },
                    { "retrievedContext": { "title": "ignored" } },
                    { "maps": { "title": "", "uri": "https://maps.example/blank" } }
                ]}
            }]
        }))
        .unwrap();

        assert_eq!(
            response.citation_links(),
            vec![
                CitationLink::new("Guide", "https://guide.example"),
                CitationLink::new("Acme Gym", "https://maps.example/acme"),
            ]
        );
    }
}
