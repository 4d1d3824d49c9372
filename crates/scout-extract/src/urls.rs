//! URLs synthesized from place names.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and the RFC 3986 unreserved marks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";
const IMAGE_SEED_BASE: &str = "https://picsum.photos/seed/";

/// Generic map search for a place with no usable citation link.
#[must_use]
pub fn maps_search_url(name: &str) -> String {
    format!("{MAPS_SEARCH_BASE}{}", utf8_percent_encode(name, COMPONENT))
}

/// Illustrative image seeded by the place name. The same name always yields
/// the same URL.
#[must_use]
pub fn place_image_url(name: &str) -> String {
    format!(
        "{IMAGE_SEED_BASE}{}/600/400",
        utf8_percent_encode(name, COMPONENT)
    )
}
