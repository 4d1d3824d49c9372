//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use scout_core::{SearchResponse, UserLocation};
use scout_extract::build_search_response;

use crate::error::GeminiError;
use crate::prompt::build_prompt;
use crate::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GroundedAnswer};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for grounded place searches.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("search-scout/0.1 (place-search)")
            .build()?;

        // A trailing slash makes `Url::join` append to the base path instead
        // of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeminiError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Searches for `query` near `location` and extracts structured places
    /// from the grounded answer.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`GeminiClient::generate`]. Extraction
    /// itself never fails.
    pub async fn find_nearby_places(
        &self,
        query: &str,
        location: Option<UserLocation>,
    ) -> Result<SearchResponse, GeminiError> {
        let answer = self.generate(query, location).await?;
        let response = build_search_response(answer.text, answer.links, query);
        tracing::info!(
            query,
            places = response.places.len(),
            links = response.grounding_links.len(),
            "place search completed"
        );
        Ok(response)
    }

    /// Sends one grounded generation request for `query`.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status.
    /// - [`GeminiError::Deserialize`] if the body is not the expected shape.
    pub async fn generate(
        &self,
        query: &str,
        location: Option<UserLocation>,
    ) -> Result<GroundedAnswer, GeminiError> {
        let url = self.endpoint()?;
        let request = GenerateContentRequest::grounded(build_prompt(query), location);

        tracing::debug!(
            model = %self.model,
            query,
            has_location = location.is_some(),
            "requesting grounded answer"
        );

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        Ok(parsed.into_answer())
    }

    /// `{base}/v1beta/models/{model}:generateContent`
    fn endpoint(&self) -> Result<Url, GeminiError> {
        let path = format!("v1beta/models/{}:generateContent", self.model);
        self.base_url
            .join(&path)
            .map_err(|e| GeminiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
