use crate::domain::{City, Coordinate, Place};
use crate::place_loader::parser::{ParseError, parse_places};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// The loader result: every valid place in document order, and one city per
/// distinct city name in first-seen order. Cities start out unresolved.
#[derive(Debug)]
pub struct PlaceDirectory {
    places: Vec<Place>,
    cities: Vec<Arc<City>>,
}

impl PlaceDirectory {
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn cities(&self) -> &[Arc<City>] {
        &self.cities
    }
}

/// Loads the bundled places document. A missing or unreadable file and
/// malformed coordinate text are fatal; places failing validation are skipped
/// by the parser with a logged reason.
#[instrument]
pub async fn load_places(path: &str, fallback: Coordinate) -> Result<PlaceDirectory, LoaderError> {
    info!("📁 Loading places...");
    let xml = fs::read_to_string(path).await.map_err(|source| LoaderError::Io {
        source,
        path: path.into(),
    })?;

    let places = parse_places(&xml)?;
    let cities = derive_cities(&places, fallback);
    info!("📁 Loading places... OK, {} place(s) in {} city(ies)", places.len(), cities.len());

    Ok(PlaceDirectory { places, cities })
}

fn derive_cities(places: &[Place], fallback: Coordinate) -> Vec<Arc<City>> {
    let mut cities: Vec<Arc<City>> = Vec::new();
    for place in places {
        if !cities.iter().any(|city| city.name() == place.city()) {
            cities.push(Arc::new(City::new(place.city().to_owned(), fallback)));
        }
    }

    cities
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
