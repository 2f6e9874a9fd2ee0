use crate::domain::Coordinate;
use crate::geocoding::search_get::SearchGet;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

/// A free-text place-search service resolving a query to zero or more
/// coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<GeocodedPlace>, GeocodeError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub display_name: String,
    pub coordinate: Coordinate,
}

/// [`Geocoder`] backed by a Nominatim-style search endpoint.
pub struct NominatimGeocoder {
    client: Client,
    url: String,
}

impl NominatimGeocoder {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        NominatimGeocoder { client, url: url.into() }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<GeocodedPlace>, GeocodeError> {
        info!("Searching for '{}'...", query);
        let response = self
            .client
            .get(format!("{}/search", self.url))
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let results = response.json::<Vec<SearchGet>>().await?;
        info!("Searching for '{}'... OK, {} result(s)", query, results.len());

        results.into_iter().map(|result| to_geocoded_place(query, result)).collect()
    }
}

fn to_geocoded_place(query: &str, result: SearchGet) -> Result<GeocodedPlace, GeocodeError> {
    let latitude = result.lat.parse().map_err(|_| GeocodeError::InvalidCoordinate {
        query: query.to_owned(),
        value: result.lat.clone(),
    })?;
    let longitude = result.lon.parse().map_err(|_| GeocodeError::InvalidCoordinate {
        query: query.to_owned(),
        value: result.lon.clone(),
    })?;

    Ok(GeocodedPlace {
        display_name: result.display_name,
        coordinate: Coordinate { latitude, longitude },
    })
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid coordinate '{value}' in search result for '{query}'")]
    InvalidCoordinate { query: String, value: String },
}
