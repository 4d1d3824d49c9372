use super::*;

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["scout-cli", "search", "Pharmacy"]).expect("expected valid cli args");

    let Commands::Search {
        query,
        lat,
        lng,
        min_rating,
        category,
        json,
    } = cli.command;
    assert_eq!(query, "Pharmacy");
    assert!(lat.is_none());
    assert!(lng.is_none());
    assert!(min_rating.abs() < f64::EPSILON);
    assert!(category.is_none());
    assert!(!json);
}

#[test]
fn parses_location_and_filters() {
    let cli = Cli::try_parse_from([
        "scout-cli",
        "search",
        "Shopping Mall",
        "--lat",
        "8.9604",
        "--lng",
        "-97.7431",
        "--min-rating",
        "4.2",
        "--category",
        "Mall",
        "--json",
    ])
    .expect("expected valid cli args");

    let Commands::Search {
        query,
        lat,
        lng,
        min_rating,
        category,
        json,
    } = cli.command;
    assert_eq!(query, "Shopping Mall");
    assert!((lat.unwrap() - 8.9604).abs() < 1e-9);
    assert!((lng.unwrap() + 97.7431).abs() < 1e-9);
    assert!((min_rating - 4.2).abs() < 1e-9);
    assert_eq!(category.as_deref(), Some("Mall"));
    assert!(json);
}

#[test]
fn query_is_trimmed() {
    let cli = Cli::try_parse_from(["scout-cli", "search", "  Gym  "]).expect("expected valid cli args");
    let Commands::Search { query, .. } = cli.command;
    assert_eq!(query, "Gym");
}

#[test]
fn blank_query_is_rejected() {
    assert!(Cli::try_parse_from(["scout-cli", "search", "   "]).is_err());
}

#[test]
fn latitude_requires_longitude() {
    assert!(Cli::try_parse_from(["scout-cli", "search", "Gym", "--lat", "8.9"]).is_err());
    assert!(Cli::try_parse_from(["scout-cli", "search", "Gym", "--lng", "77.3"]).is_err());
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["scout-cli"]).is_err());
}

#[test]
fn json_output_accepts_filters() {
    let cli = Cli::try_parse_from([
        "scout-cli",
        "search",
        "Gym",
        "--min-rating",
        "4.5",
        "--json",
    ])
    .expect("expected valid cli args");
    let Commands::Search {
        min_rating, json, ..
    } = cli.command;
    assert!((min_rating - 4.5).abs() < 1e-9);
    assert!(json);
}

#[test]
fn failure_message_includes_cause_only_in_development() {
    let cause = "API error 503: Service Unavailable";
    assert_eq!(
        search_failure_message(&Environment::Development, &cause),
        "Search failed. Please try a different category. (API error 503: Service Unavailable)"
    );
    assert_eq!(
        search_failure_message(&Environment::Production, &cause),
        "Search failed. Please try a different category."
    );
    assert_eq!(
        search_failure_message(&Environment::Test, &cause),
        "Search failed. Please try a different category."
    );
}
