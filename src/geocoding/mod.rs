mod client;
mod geocoder;
mod resolver;
mod search_get;

pub use client::{GeocodeClientError, new_client};
pub use geocoder::{GeocodeError, GeocodedPlace, Geocoder, NominatimGeocoder};
pub use resolver::resolve_cities;
