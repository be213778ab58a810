//! Application Configuration
//!
//! Compile-time settings. Override with environment variables at build time,
//! e.g. `API_BASE_URL=https://api.example.org trunk build`.

use point_form::Coordinates;

use crate::api::{ApiClient, ReferenceData};

/// Backend base URL
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3333",
};

/// Host serving `provinces.json` and `geolocation.json`
pub const REFERENCE_DATA_URL: &str = match option_env!("REFERENCE_DATA_URL") {
    Some(url) => url,
    None => "http://localhost:3333/reference",
};

pub const MAP_TILE_URL: &str = match option_env!("MAP_TILE_URL") {
    Some(url) => url,
    None => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
};

pub const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

pub const DEFAULT_ZOOM: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub reference_data_url: String,
    pub tile_url: String,
    pub attribution: String,
    pub default_zoom: f64,
    /// Map center until geolocation resolves
    pub fallback_center: Coordinates,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            reference_data_url: REFERENCE_DATA_URL.to_string(),
            tile_url: MAP_TILE_URL.to_string(),
            attribution: MAP_ATTRIBUTION.to_string(),
            default_zoom: DEFAULT_ZOOM,
            fallback_center: Coordinates::origin(),
        }
    }
}

impl AppConfig {
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.api_base_url)
    }

    pub fn reference_data(&self) -> ReferenceData {
        ReferenceData::new(&self.reference_data_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_zoom, 15.0);
        assert_eq!(config.fallback_center, Coordinates::new(0.0, 0.0));
        assert!(config.tile_url.contains("{z}/{x}/{y}"));
    }
}
