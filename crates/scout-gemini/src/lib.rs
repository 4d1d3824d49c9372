//! Query submission against the Gemini `generateContent` API with Google Maps
//! and Google Search grounding.
//!
//! [`GeminiClient::generate`] performs the single request/response exchange;
//! [`GeminiClient::find_nearby_places`] runs the answer through the
//! extraction engine. There is no retry: a failed exchange is reported as
//! one [`GeminiError`] with no partial output.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use prompt::build_prompt;
pub use types::GroundedAnswer;
