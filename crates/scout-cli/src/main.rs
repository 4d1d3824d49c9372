mod filter;
mod render;

use clap::{Parser, Subcommand};
use scout_core::{Environment, UserLocation};
use scout_gemini::GeminiClient;
use tracing_subscriber::EnvFilter;

use crate::filter::{filter_places, filtered_response, unique_categories};
use crate::render::render_places;

#[derive(Debug, Parser)]
#[command(name = "scout-cli")]
#[command(about = "Find well-rated local places for a category")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for places matching a category, e.g. "Pharmacy" or "Gym".
    Search {
        #[arg(value_parser = parse_query)]
        query: String,

        /// Latitude to bias results toward.
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude to bias results toward.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Hide places rated below this value.
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,

        /// Only show places in this category ("All" shows every category).
        #[arg(long)]
        category: Option<String>,

        /// Print the filtered response as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn parse_query(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("query must not be blank".to_string());
    }
    Ok(trimmed.to_string())
}

/// Message shown when the upstream search fails. Development builds include
/// the underlying error.
fn search_failure_message(env: &Environment, err: &dyn std::fmt::Display) -> String {
    const GENERIC: &str = "Search failed. Please try a different category.";
    if matches!(env, Environment::Development) {
        format!("{GENERIC} ({err})")
    } else {
        GENERIC.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = scout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            query,
            lat,
            lng,
            min_rating,
            category,
            json,
        } => {
            let location = lat
                .zip(lng)
                .map(|(latitude, longitude)| UserLocation {
                    latitude,
                    longitude,
                });

            let client = GeminiClient::with_base_url(
                &config.gemini_api_key,
                &config.gemini_model,
                config.request_timeout_secs,
                &config.gemini_base_url,
            )?;

            let response = match client.find_nearby_places(&query, location).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(error = %err, query = %query, "place search failed");
                    anyhow::bail!(search_failure_message(&config.env, &err));
                }
            };

            if json {
                let filtered = filtered_response(&response, min_rating, category.as_deref());
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else {
                let places = filter_places(&response.places, min_rating, category.as_deref());
                let categories = unique_categories(&response.places);
                print!(
                    "{}",
                    render_places(&query, &places, &categories, &response.grounding_links)
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
