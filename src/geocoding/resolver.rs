use crate::domain::{City, Resolution};
use crate::geocoding::geocoder::Geocoder;
use std::sync::Arc;
use tokio::task;
use tracing::{info, instrument, warn};

/// Issues one forward-geocoding lookup per city, fire and forget. Each city
/// publishes its outcome through its resolution state; a failed lookup leaves
/// the fallback coordinate in place and never fails the load.
pub fn resolve_cities(geocoder: Arc<dyn Geocoder>, cities: &[Arc<City>]) {
    for city in cities {
        let geocoder = geocoder.clone();
        let city = city.clone();
        task::spawn(async move {
            resolve_city(geocoder.as_ref(), &city).await;
        });
    }
}

#[instrument(skip_all, fields(city = city.name()))]
async fn resolve_city(geocoder: &dyn Geocoder, city: &City) {
    match geocoder.search(city.name()).await {
        Ok(results) => match results.into_iter().next() {
            Some(place) => {
                info!("🌍 Resolved '{}' to {} ({})", city.name(), place.coordinate, place.display_name);
                city.set_resolution(Resolution::Resolved(place.coordinate));
            }
            None => {
                warn!("⚠️ Cannot find location for '{}'", city.name());
                city.set_resolution(Resolution::Failed("no results".to_string()));
            }
        },
        Err(err) => {
            warn!("⚠️ Geocoding '{}' failed: {}", city.name(), err);
            city.set_resolution(Resolution::Failed(err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::geocoding::geocoder::{GeocodeError, GeocodedPlace};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    const FALLBACK: Coordinate = Coordinate {
        latitude: 59.9366713,
        longitude: 30.3150267,
    };

    struct StubGeocoder {
        results: Vec<GeocodedPlace>,
    }

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn search(&self, _query: &str) -> Result<Vec<GeocodedPlace>, GeocodeError> {
            Ok(self.results.clone())
        }
    }

    struct FailingGeocoder;

    #[async_trait]
    impl Geocoder for FailingGeocoder {
        async fn search(&self, query: &str) -> Result<Vec<GeocodedPlace>, GeocodeError> {
            Err(GeocodeError::InvalidCoordinate {
                query: query.to_owned(),
                value: "broken".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn resolve_cities_takes_the_first_result_coordinate() {
        let coordinate = Coordinate {
            latitude: 55.7505412,
            longitude: 37.6174782,
        };
        let geocoder = Arc::new(StubGeocoder {
            results: vec![
                GeocodedPlace {
                    display_name: "Moscow, Russia".to_string(),
                    coordinate,
                },
                GeocodedPlace {
                    display_name: "Moscow, Idaho, United States".to_string(),
                    coordinate: Coordinate {
                        latitude: 46.7323875,
                        longitude: -117.0001651,
                    },
                },
            ],
        });
        let cities = vec![Arc::new(City::new("Moscow".to_string(), FALLBACK))];

        resolve_cities(geocoder, &cities);

        assert_eq!(cities[0].resolved().await, coordinate);
        assert_eq!(cities[0].resolution(), Resolution::Resolved(coordinate));
    }

    #[tokio::test]
    async fn a_city_without_results_fails_and_keeps_the_fallback() {
        let geocoder = Arc::new(StubGeocoder { results: vec![] });
        let cities = vec![Arc::new(City::new("Atlantis".to_string(), FALLBACK))];

        resolve_cities(geocoder, &cities);

        assert_eq!(cities[0].resolved().await, FALLBACK);
        assert_eq!(cities[0].resolution(), Resolution::Failed("no results".to_string()));
    }

    #[tokio::test]
    async fn a_geocoder_error_fails_the_city_and_keeps_the_fallback() {
        let cities = vec![Arc::new(City::new("Moscow".to_string(), FALLBACK))];

        resolve_cities(Arc::new(FailingGeocoder), &cities);

        assert_eq!(cities[0].resolved().await, FALLBACK);
        assert!(matches!(cities[0].resolution(), Resolution::Failed(_)));
    }

    #[tokio::test]
    async fn every_city_is_resolved_independently() {
        let coordinate = Coordinate {
            latitude: 55.7505412,
            longitude: 37.6174782,
        };
        let geocoder = Arc::new(StubGeocoder {
            results: vec![GeocodedPlace {
                display_name: "Moscow, Russia".to_string(),
                coordinate,
            }],
        });
        let cities = vec![
            Arc::new(City::new("Moscow".to_string(), FALLBACK)),
            Arc::new(City::new("Saint Petersburg".to_string(), FALLBACK)),
        ];

        resolve_cities(geocoder, &cities);

        for city in &cities {
            assert_eq!(city.resolved().await, coordinate);
        }
    }
}
