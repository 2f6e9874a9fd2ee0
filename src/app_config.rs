use crate::domain::Coordinate;
use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    places: Places,
    geocoding: Geocoding,
    location: Coordinate,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn places(&self) -> &Places {
        &self.places
    }

    pub fn geocoding(&self) -> &Geocoding {
        &self.geocoding
    }

    /// The coordinate a city reports until its lookup has resolved.
    pub fn fallback_location(&self) -> Coordinate {
        self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Places {
    file: String,
}

impl Places {
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoding {
    url: String,
    user_agent: String,
    timeout_ms: u64,
}

impl Geocoding {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                places: Places {
                    file: "resources/PlacesInfo.xml".to_string(),
                },
                geocoding: Geocoding {
                    url: "https://nominatim.test/".to_string(),
                    user_agent: "coffeemap/0.1".to_string(),
                    timeout_ms: 10_000,
                },
                location: Coordinate {
                    latitude: 59.9366713,
                    longitude: 30.3150267,
                },
            },
        }
    }

    pub fn geocoding_url(mut self, url: String) -> Self {
        self.config.geocoding.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
