use crate::app_config::AppConfig;
use crate::domain::Resolution;
use crate::geocoding::NominatimGeocoder;
use crate::place_loader::load_places;
use std::sync::Arc;
use tracing::{info, warn};

mod app_config;
mod coordinate_deserializer;
mod domain;
mod extensions;
mod geocoding;
mod place_loader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let client = geocoding::new_client(&config)?;
    let geocoder = Arc::new(NominatimGeocoder::new(client, config.geocoding().url()));

    let directory = load_places(config.places().file(), config.fallback_location())
        .await
        .expect("Could not load places");

    for place in directory.places() {
        info!("📍 {}", place);
    }

    geocoding::resolve_cities(geocoder, directory.cities());
    info!("✅  Issued geocoding lookups");
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    for city in directory.cities() {
        city.resolved().await;
        match city.resolution() {
            Resolution::Failed(reason) => warn!("🏙️ {}: {} ({})", city.name(), city.coordinate(), reason),
            _ => info!("🏙️ {}: {}", city.name(), city.coordinate()),
        }
    }

    Ok(())
}
