use crate::domain::Coordinate;
use crate::extensions::str_ext::Capitalized;
use std::fmt;

/// A single coffee-shop entry. Only valid places exist: construction goes
/// through [`PlaceDraft::build`] and the fields never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    city: String,
    address: String,
    coordinates: Coordinate,
}

impl Place {
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> Coordinate {
        self.coordinates
    }
}

impl fmt::Display for Place {
    /// The annotation title shown on the map: city, then the address with
    /// every word capitalized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},\n{}", self.city, self.address.capitalized())
    }
}

/// A place under construction while its XML element is still open.
#[derive(Debug, Default)]
pub struct PlaceDraft {
    pub city: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinate>,
}

impl PlaceDraft {
    /// Turns the draft into a [`Place`] if the city and address are non-empty
    /// and the coordinates are set. Hands the draft back otherwise so the
    /// caller can log what was missing.
    pub fn build(self) -> Result<Place, PlaceDraft> {
        match self {
            PlaceDraft {
                city: Some(city),
                address: Some(address),
                coordinates: Some(coordinates),
            } if !city.is_empty() && !address.is_empty() => Ok(Place {
                city,
                address,
                coordinates,
            }),
            draft => Err(draft),
        }
    }
}
