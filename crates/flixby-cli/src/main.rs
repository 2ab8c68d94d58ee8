mod pipeline;
mod suggest;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use flixby_core::{AppConfig, Environment};
use flixby_places::{PlacesClient, PlacesError, PlacesResolver, SyntheticPlaces};
use pipeline::PlaceSelection;
use flixby_scraper::WebsiteClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flixby")]
#[command(about = "Quick setup for a Flixby AI phone assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract a business profile from a website
    Website {
        /// Website address; `https://` is added when no scheme is given
        url: String,
    },
    /// Look up businesses by name
    Search {
        /// Business name, at least two characters
        term: String,

        /// Town or area appended to the query
        #[arg(long)]
        location: Option<String>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the profile of a business listing
    Place {
        /// Place id from `search`
        place_id: String,

        /// Business name listed next to the id; required for synthetic ids
        #[arg(long)]
        name: Option<String>,

        /// Location listed next to the id
        #[arg(long)]
        location: Option<String>,
    },
    /// Build the assistant system prompt from a website, a listing, or both
    Prompt {
        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        place_id: Option<String>,

        /// Business name listed next to the place id
        #[arg(long, requires = "place_id")]
        name: Option<String>,

        /// Location listed next to the place id
        #[arg(long, requires = "place_id")]
        location: Option<String>,

        /// Print the merged profile and prompt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search as you type: each stdin line replaces the search box contents
    Suggest {
        #[arg(long)]
        location: Option<String>,
    },
}

type Resolver = PlacesResolver<PlacesClient, SyntheticPlaces>;

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.env != Environment::Production)
        .init();
    Ok(())
}

fn build_website_client(config: &AppConfig) -> anyhow::Result<WebsiteClient> {
    Ok(WebsiteClient::new(
        &config.html_proxy_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?)
}

fn build_resolver(config: &AppConfig) -> anyhow::Result<Resolver> {
    let client = PlacesClient::from_config(config)?;
    if !client.is_enabled() {
        tracing::info!("GOOGLE_MAPS_API_KEY not set; place lookups use synthetic data");
    }
    Ok(PlacesResolver::new(client, SyntheticPlaces::new())
        .with_min_chars(config.suggest_min_chars)
        .with_max_results(config.suggest_max_results))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = flixby_core::load_app_config()?;
    init_tracing(&config)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Website { url }) => {
            let client = build_website_client(&config)?;
            let profile = client.fetch_website_profile(&url).await?;
            print_json(&profile)?;
        }
        Some(Commands::Search {
            term,
            location,
            json,
        }) => {
            let resolver = build_resolver(&config)?;
            let token = uuid::Uuid::new_v4().to_string();
            let suggestions = resolver.search(&term, location.as_deref(), &token).await;
            if json {
                print_json(&suggestions)?;
            } else {
                suggest::print_suggestions(&term, &suggestions);
            }
        }
        Some(Commands::Place {
            place_id,
            name,
            location,
        }) => {
            let selection = PlaceSelection::new(
                Some(place_id.as_str()),
                name.as_deref(),
                location.as_deref(),
            )
            .ok_or(PlacesError::EmptyPlaceId)?;
            let resolver = build_resolver(&config)?;
            let profile = selection.fetch(&resolver).await?;
            print_json(&profile)?;
        }
        Some(Commands::Prompt {
            url,
            place_id,
            name,
            location,
            json,
        }) => {
            let place =
                PlaceSelection::new(place_id.as_deref(), name.as_deref(), location.as_deref());
            let request = pipeline::SetupRequest::new(url.as_deref(), place)?;
            let website = build_website_client(&config)?;
            let resolver = build_resolver(&config)?;
            let outcome = pipeline::run_setup(&website, &resolver, &request).await?;
            if json {
                print_json(&outcome)?;
            } else {
                pipeline::print_outcome(&outcome);
            }
        }
        Some(Commands::Suggest { location }) => {
            let resolver = Arc::new(build_resolver(&config)?);
            let debounce = Duration::from_millis(config.suggest_debounce_ms);
            suggest::run_interactive(resolver, debounce, location).await?;
        }
        None => println!("flixby: run `flixby --help` to list commands"),
    }

    Ok(())
}
