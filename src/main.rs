use roommate_match::config::{LoggingSettings, Settings};
use roommate_match::models::{SearchQuery, SearchRequest};
use roommate_match::services::{load_candidates, RoommateDirectory};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Run one directory search and print the view as JSON on stdout
///
/// Usage: `roommate-match ['{"location":"zam","sortBy":"price-low"}']`
///
/// The optional argument is a search request layered over the configured
/// filters.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    let candidates = load_candidates(&settings.dataset.path).map_err(|e| {
        error!("Failed to load dataset: {}", e);
        e
    })?;

    let mut directory = RoommateDirectory::with_cache(candidates, settings.cache.capacity);
    directory.set_sort_key(settings.search.sort_key());
    directory.set_filters(settings.search.filters()?.into());

    let query = match std::env::args().nth(1) {
        Some(raw) => {
            let request: SearchRequest = serde_json::from_str(&raw)?;
            request.into_query().map_err(|e| {
                error!("Rejected search request: {}", e);
                e
            })?
        }
        None => SearchQuery::default(),
    };

    let response = directory.respond(query, settings.search.limit);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
