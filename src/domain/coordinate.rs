use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Parses `"<latitude>, <longitude>"`. The separator is the literal `", "`,
    /// anything other than exactly two numeric components is an error.
    pub fn parse(text: &str) -> Result<Coordinate, CoordinateParseError> {
        let components: Vec<&str> = text.split(", ").collect();
        if components.len() != 2 {
            return Err(CoordinateParseError::ComponentCount(components.len()));
        }

        let latitude = components[0]
            .parse()
            .map_err(|_| CoordinateParseError::NotANumber(components[0].to_owned()))?;
        let longitude = components[1]
            .parse()
            .map_err(|_| CoordinateParseError::NotANumber(components[1].to_owned()))?;

        Ok(Coordinate { latitude, longitude })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateParseError {
    #[error("expected 'latitude, longitude', found {0} component(s)")]
    ComponentCount(usize),
    #[error("coordinate component '{0}' is not a number")]
    NotANumber(String),
}
