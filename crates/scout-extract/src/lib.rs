//! Reconstructs structured place records from a generated, grounded answer.
//!
//! The pipeline is a single deterministic pass: the raw text is cut into
//! candidate blocks ([`segment`]), each block is read through a small
//! label-prefixed line grammar ([`fields`]), every surviving record is paired
//! with a citation link ([`reconcile`]), and when nothing structured survives
//! the citation links themselves become the result ([`fallback`]).
//!
//! Nothing here performs I/O or fails. Ragged input degrades toward emptier
//! output.

pub mod engine;
pub mod fallback;
pub mod fields;
pub mod reconcile;
pub mod segment;
pub mod urls;

pub use engine::{build_search_response, extract_places, Extraction, ExtractionMode};
pub use fallback::synthesize_from_links;
pub use fields::{extract_fields, ExtractedFields, Field, FieldRule, FieldValue, FIELD_RULES};
pub use reconcile::reconcile_link;
pub use segment::segment_blocks;
pub use urls::{maps_search_url, place_image_url};
