use serde::Deserialize;

/// One entry of a place-search response. Coordinates arrive as strings.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct SearchGet {
    pub place_id: u64,
    pub lat: String,
    pub lon: String,
    pub name: String,
    pub display_name: String,
    pub addresstype: Option<String>,
}
