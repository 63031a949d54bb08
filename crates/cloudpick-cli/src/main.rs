mod render;

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cloudpick_catalog::{CatalogClient, GeolocationClient, Lookup, Session};
use cloudpick_core::{
    parse_latitude, parse_longitude, AppConfig, Location, RegionRecord, SelectionEvent,
    SelectionState,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cloudpick-cli")]
#[command(about = "Pick a cloud region, nearest first")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Provider code to filter by (e.g. aws, google)
    #[arg(long, global = true)]
    provider: Option<String>,

    /// Region to filter by, as listed by `regions` (e.g. "north america")
    #[arg(long, global = true)]
    region: Option<String>,

    /// City description to highlight in the `cities` listing
    #[arg(long, global = true)]
    city: Option<String>,

    /// Your latitude; skips geolocation when given with --lon
    #[arg(
        long,
        global = true,
        requires = "lon",
        allow_negative_numbers = true,
        value_parser = parse_latitude
    )]
    lat: Option<f64>,

    /// Your longitude; skips geolocation when given with --lat
    #[arg(
        long,
        global = true,
        requires = "lat",
        allow_negative_numbers = true,
        value_parser = parse_longitude
    )]
    lon: Option<f64>,

    /// Do not look up your position; rank from the configured fallback
    #[arg(long, global = true)]
    no_geolocate: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Commands {
    /// List provider options
    Providers,
    /// List region options
    Regions,
    /// List matching cities, nearest first (default)
    Cities,
}

impl Cli {
    fn location_override(&self) -> Option<Location> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Location::new(lat, lon)),
            _ => None,
        }
    }

    /// User picks, in the order a person would make them.
    fn selection_events(&self) -> Vec<SelectionEvent> {
        let mut events = Vec::new();
        if let Some(provider) = &self.provider {
            events.push(SelectionEvent::ProviderChanged(provider.clone()));
        }
        if let Some(region) = &self.region {
            events.push(SelectionEvent::RegionChanged(region.clone()));
        }
        if let Some(city) = &self.city {
            events.push(SelectionEvent::CityChanged(city.clone()));
        }
        events
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = cloudpick_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Cities);
    tracing::debug!(?config, ?command, "starting");

    let state = load_selection(&config, &cli).await?;

    let output = match command {
        Commands::Providers => render::options(&state.provider_options, cli.json)?,
        Commands::Regions => render::options(&state.region_options, cli.json)?,
        Commands::Cities => render::cities(&state, cli.json)?,
    };
    println!("{output}");

    Ok(())
}

/// Fetches the catalog (and the user's position, unless overridden or
/// disabled), then replays the picks given on the command line.
///
/// Catalog and geolocation failures are logged by the session and never
/// reach this function as errors.
///
/// # Errors
///
/// Returns an error if either HTTP client cannot be constructed, which in
/// practice means a malformed URL in the configuration.
async fn load_selection(config: &AppConfig, cli: &Cli) -> anyhow::Result<SelectionState> {
    let catalog_client = CatalogClient::new(
        &config.catalog_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build catalog client")?;
    let catalog: Lookup<Vec<RegionRecord>> =
        Box::pin(async move { catalog_client.fetch_regions().await });

    let (fallback, location) = match cli.location_override() {
        Some(location) => (location, None),
        None if config.geolocate && !cli.no_geolocate => {
            let geo_client = GeolocationClient::new(
                &config.geolocation_url,
                config.request_timeout_secs,
                &config.user_agent,
            )
            .context("failed to build geolocation client")?;
            let lookup: Lookup<Location> = Box::pin(async move { geo_client.locate().await });
            (config.fallback_location, Some(lookup))
        }
        None => (config.fallback_location, None),
    };

    let mut session = Session::start(fallback, catalog, location);
    session
        .settle(Duration::from_secs(config.geolocation_timeout_secs))
        .await;

    for event in cli.selection_events() {
        session.dispatch(event);
    }

    Ok(session.into_state())
}
