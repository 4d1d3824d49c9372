//! Splits a generated answer into candidate place blocks.

use std::sync::LazyLock;

use regex::Regex;

/// Literal separator the prompt asks the model to put after every place.
pub const BLOCK_SEPARATOR: &str = "---";

/// A blank line directly followed by a `Place Name:` label, with the same
/// stacked list and markdown decoration the field grammar accepts. Only
/// capture group 1 (the blank line) is consumed as the separator.
static PLACE_NAME_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\n[ \t]*\r?\n)[ \t]*(?:[-*_•>#]+[ \t]*|\d+[.)][ \t]*)*(?:\*\*|__)?place name(?:\*\*|__)?[ \t]*:",
    )
    .expect("valid regex")
});

/// Cuts `text` into ordered candidate blocks.
///
/// A block ends at every `---` and at every blank line that immediately
/// precedes a `Place Name` label. Empty pieces between adjacent separators
/// are kept: callers index blocks positionally, and those pieces simply fail
/// extraction later. Empty input yields no blocks.
#[must_use]
pub fn segment_blocks(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for piece in text.split(BLOCK_SEPARATOR) {
        let mut start = 0;
        for caps in PLACE_NAME_BOUNDARY.captures_iter(piece) {
            let Some(blank) = caps.get(1) else {
                continue;
            };
            blocks.push(&piece[start..blank.start()]);
            start = blank.end();
        }
        blocks.push(&piece[start..]);
    }
    blocks
}
