//! Label-prefixed line grammar for a single place block.
//!
//! Each recognized field is a line that starts with a case-insensitive label
//! followed by `:` and a value running to end of line:
//!
//! ```text
//! Place Name: Joe's Diner
//! Category: Restaurant
//! Address: 12 Main St, Springfield
//! Rating: 4.7
//! Review: Great pie.
//! ```
//!
//! Light list and markdown decoration in front of a label is tolerated
//! (`- `, `* `, `> `, `1. `, `**Rating:**`), since model output drifts into
//! it regularly. The grammar is held in [`FIELD_RULES`] so that each field
//! can be exercised in isolation.

use std::sync::LazyLock;

use regex::Regex;
use scout_core::PlaceRecord;

use crate::urls::place_image_url;

/// Rating used when the block carries no usable rating.
pub const DEFAULT_RATING: f64 = 4.5;

/// Address used when the block carries no address.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

const MAX_RATING: f64 = 5.0;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

/// The fields the grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Address,
    Rating,
    Review,
}

/// A parsed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Rating(f64),
}

/// One row of the grammar: which label introduces a field, whether a block
/// without it is rejected, and how its raw value is parsed.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    /// Label text without the trailing colon.
    pub label: &'static str,
    /// A block missing a required field is discarded.
    pub required: bool,
    /// Returns `None` when the raw value is unusable.
    pub parse: fn(&str) -> Option<FieldValue>,
}

pub static FIELD_RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Name,
        label: "Place Name",
        required: true,
        parse: parse_text,
    },
    FieldRule {
        field: Field::Category,
        label: "Category",
        required: false,
        parse: parse_text,
    },
    FieldRule {
        field: Field::Address,
        label: "Address",
        required: false,
        parse: parse_text,
    },
    FieldRule {
        field: Field::Rating,
        label: "Rating",
        required: false,
        parse: parse_rating,
    },
    FieldRule {
        field: Field::Review,
        label: "Review",
        required: false,
        parse: parse_text,
    },
];

impl FieldRule {
    /// Finds the first line in `block` carrying this rule's label whose value
    /// parses.
    #[must_use]
    pub fn find(&self, block: &str) -> Option<FieldValue> {
        block
            .lines()
            .filter_map(|line| labelled_value(line, self.label))
            .find_map(self.parse)
    }
}

/// Fields recovered from one block, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub snippet: Option<String>,
}

impl ExtractedFields {
    /// Returns `true` when every required field was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        FIELD_RULES
            .iter()
            .filter(|rule| rule.required)
            .all(|rule| match rule.field {
                Field::Name => self.name.is_some(),
                Field::Category => self.category.is_some(),
                Field::Address => self.address.is_some(),
                Field::Rating => self.rating.is_some(),
                Field::Review => self.snippet.is_some(),
            })
    }

    /// Applies field defaults and builds the record.
    ///
    /// Returns `None` when a required field is missing.
    #[must_use]
    pub fn into_record(self, query: &str, maps_url: String) -> Option<PlaceRecord> {
        if !self.is_complete() {
            return None;
        }
        let name = self.name?;
        Some(PlaceRecord {
            image_url: place_image_url(&name),
            category: self.category.unwrap_or_else(|| query.to_string()),
            rating: self.rating.unwrap_or(DEFAULT_RATING),
            address: self
                .address
                .unwrap_or_else(|| ADDRESS_NOT_FOUND.to_string()),
            snippet: self.snippet.unwrap_or_else(|| default_snippet(query)),
            maps_url,
            is_open: true,
            name,
        })
    }
}

/// Snippet used when the block carries no review.
#[must_use]
pub fn default_snippet(query: &str) -> String {
    format!("Highly rated {query} spot.")
}

/// Runs every rule in [`FIELD_RULES`] over `block`.
#[must_use]
pub fn extract_fields(block: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    for rule in &FIELD_RULES {
        match (rule.field, rule.find(block)) {
            (Field::Name, Some(FieldValue::Text(v))) => fields.name = Some(v),
            (Field::Category, Some(FieldValue::Text(v))) => fields.category = Some(v),
            (Field::Address, Some(FieldValue::Text(v))) => fields.address = Some(v),
            (Field::Review, Some(FieldValue::Text(v))) => fields.snippet = Some(v),
            (Field::Rating, Some(FieldValue::Rating(r))) => fields.rating = Some(r),
            _ => {}
        }
    }
    fields
}

fn parse_text(raw: &str) -> Option<FieldValue> {
    let value = raw.trim().trim_matches('*').trim();
    (!value.is_empty()).then(|| FieldValue::Text(value.to_string()))
}

/// First numeric token in the value, accepted only on a 0–5 scale.
fn parse_rating(raw: &str) -> Option<FieldValue> {
    let token = NUMBER_RE.find(raw)?.as_str();
    let rating = token.parse::<f64>().ok()?;
    (rating.is_finite() && (0.0..=MAX_RATING).contains(&rating))
        .then_some(FieldValue::Rating(rating))
}

/// Returns the raw value after `label:` when `line` starts with that label.
fn labelled_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = strip_decoration(line);
    let head = rest.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let rest = rest[label.len()..].trim_start_matches(['*', '_']).trim_start();
    let value = rest.strip_prefix(':')?;
    Some(value.trim_start_matches(['*', '_']))
}

/// Strips leading whitespace, bullet markers, quote markers, headings and
/// ordinal prefixes such as `3.` or `3)`.
fn strip_decoration(line: &str) -> &str {
    let mut rest = line.trim_start();
    loop {
        let next = rest
            .trim_start_matches(['-', '*', '_', '•', '>', '#'])
            .trim_start();
        let after_digits = next.trim_start_matches(|c: char| c.is_ascii_digit());
        let next = if after_digits.len() < next.len() {
            after_digits
                .strip_prefix(['.', ')'])
                .map_or(next, str::trim_start)
        } else {
            next
        };
        if next.len() == rest.len() {
            return rest;
        }
        rest = next;
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
