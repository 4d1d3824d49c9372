//! Plain-text rendering of search results.

use std::fmt::Write as _;

use scout_core::{CitationLink, PlaceRecord};

pub(crate) fn render_places(
    query: &str,
    places: &[&PlaceRecord],
    categories: &[&str],
    links: &[CitationLink],
) -> String {
    let mut out = String::new();

    if places.is_empty() {
        let _ = writeln!(out, "No places found for \"{query}\".");
    } else {
        let _ = writeln!(out, "{} place(s) for \"{query}\"", places.len());
        if categories.len() > 1 {
            let _ = writeln!(out, "Categories: {}", categories.join(", "));
        }
        for (i, place) in places.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}. {} [{}]", i + 1, place.name, place.category);
            let _ = writeln!(out, "   Rating:  {:.1}", place.rating);
            let _ = writeln!(out, "   Address: {}", place.address);
            let _ = writeln!(out, "   {}", place.snippet);
            let _ = writeln!(out, "   Map:     {}", place.maps_url);
        }
    }

    if !links.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sources:");
        for link in links {
            let _ = writeln!(out, "- {} <{}>", link.title, link.uri);
        }
    }

    out
}
