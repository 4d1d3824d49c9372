/// Builds the instruction sent with every search.
///
/// The answer format requested here is the grammar the extraction engine
/// reads: five labelled lines per place, each place closed by `---`.
#[must_use]
pub fn build_prompt(query: &str) -> String {
    let query = query.trim();
    format!(
        "Find the best and highest-rated \"{query}\" near my current location.\n\
         List the top 8-10 options.\n\
         Give every place in exactly this format:\n\
         Place Name: [Name]\n\
         Category: [Category]\n\
         Address: [Full Street Address, City, State]\n\
         Rating: [Rating]\n\
         Review: [Short snippet]\n\
         ---\n\
         Prefer places rated 4.0 or higher and always include the real city name in the address."
    )
}
